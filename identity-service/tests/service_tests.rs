mod common;

use std::sync::Arc;

use auth::Authenticator;
use auth::TokenIssuer;
use common::InMemoryUserRepository;
use identity_service::domain::user::errors::UserError;
use identity_service::domain::user::models::UserRegistration;
use identity_service::domain::user::service::IdentityService;

const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const ISSUER: &str = "identity-service";

fn service() -> (
    IdentityService<InMemoryUserRepository>,
    Arc<InMemoryUserRepository>,
) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = IdentityService::new(
        Arc::clone(&repository),
        Arc::new(Authenticator::new(SECRET, ISSUER)),
    );
    (service, repository)
}

fn jane() -> UserRegistration {
    UserRegistration::new(
        "Jane Doe".to_string(),
        "jane@example.com".to_string(),
        Some("s3cret!".to_string()),
        "+12345678901".to_string(),
    )
    .expect("registration input should be valid")
}

#[tokio::test]
async fn test_register_login_find_me_flow() {
    let (service, _) = service();

    let user = service.register(jane()).await.expect("register failed");
    assert_eq!(user.username, "jane");
    assert!(user.is_active);

    let token = service
        .login("jane@example.com", "s3cret!")
        .await
        .expect("login failed");

    let verifier = TokenIssuer::new(SECRET, ISSUER);
    let claims = verifier.verify(&token).expect("token should verify");
    assert_eq!(claims.sub, user.id.to_string());

    let profile = service.find_me(user.id).await.expect("profile missing");
    assert_eq!(profile.full_name, "Jane Doe");
    assert_eq!(profile.email, "jane@example.com");
    assert!(profile.is_active);
}

#[tokio::test]
async fn test_duplicate_email_is_field_tagged() {
    let (service, _) = service();

    service.register(jane()).await.expect("register failed");

    let same_email = UserRegistration::new(
        "John Doe".to_string(),
        "jane@example.com".to_string(),
        Some("other".to_string()),
        "+19876543210".to_string(),
    )
    .unwrap();

    let err = service.register(same_email).await.unwrap_err();
    assert_eq!(err, UserError::EmailAlreadyRegistered);
}

#[tokio::test]
async fn test_duplicate_phone_is_field_tagged() {
    let (service, _) = service();

    service.register(jane()).await.expect("register failed");

    let same_phone = UserRegistration::new(
        "John Doe".to_string(),
        "john@example.com".to_string(),
        Some("other".to_string()),
        "+12345678901".to_string(),
    )
    .unwrap();

    let err = service.register(same_phone).await.unwrap_err();
    assert_eq!(err, UserError::PhoneNumberAlreadyRegistered);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    let (service, _) = service();
    let service = Arc::new(service);

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.register(jane()).await })
    };
    let second = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.register(jane()).await })
    };

    let first = first.await.expect("task panicked");
    let second = second.await.expect("task panicked");

    // Exactly one insert wins; the loser sees the field-tagged duplicate.
    let mut results = [first, second];
    results.sort_by_key(|r| r.is_err());
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err(),
        &UserError::EmailAlreadyRegistered
    );
}

#[tokio::test]
async fn test_login_failures_are_opaque() {
    let (service, _) = service();

    service.register(jane()).await.expect("register failed");

    let unknown_email = service
        .login("ghost@example.com", "s3cret!")
        .await
        .unwrap_err();
    let wrong_password = service
        .login("jane@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(unknown_email, wrong_password);
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn test_login_without_stored_credential_fails_opaquely() {
    let (service, _) = service();

    let no_password = UserRegistration::new(
        "Jane Doe".to_string(),
        "jane@example.com".to_string(),
        None,
        "+12345678901".to_string(),
    )
    .unwrap();
    service.register(no_password).await.expect("register failed");

    let err = service
        .login("jane@example.com", "anything")
        .await
        .unwrap_err();
    assert_eq!(err, UserError::InvalidCredentials);
}

#[tokio::test]
async fn test_inactive_account_cannot_login() {
    let (service, repository) = service();

    let user = service.register(jane()).await.expect("register failed");
    repository.deactivate(user.id);

    let err = service
        .login("jane@example.com", "s3cret!")
        .await
        .unwrap_err();
    assert_eq!(err, UserError::InvalidCredentials);
}

#[tokio::test]
async fn test_soft_deleted_account_is_invisible() {
    let (service, repository) = service();

    let user = service.register(jane()).await.expect("register failed");
    repository.mark_deleted(user.id);

    let err = service.find_me(user.id).await.unwrap_err();
    assert_eq!(err, UserError::NotFound);

    let err = service
        .login("jane@example.com", "s3cret!")
        .await
        .unwrap_err();
    assert_eq!(err, UserError::InvalidCredentials);
}

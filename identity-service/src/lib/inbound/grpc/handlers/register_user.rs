use std::sync::Arc;

use tonic::Status;

use crate::domain::user::models::UserRegistration;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::IdentityService;
use crate::proto::RegisterRequest;
use crate::proto::UserResponse;

pub async fn register_user<R>(
    service: Arc<IdentityService<R>>,
    request: RegisterRequest,
) -> Result<UserResponse, Status>
where
    R: UserRepository,
{
    // Validation runs at construction; a malformed registration is rejected
    // here and never reaches the service or the store.
    let registration = UserRegistration::new(
        request.full_name,
        request.email,
        request.password,
        request.phone_number,
    )?;

    let user = service.register(registration).await?;

    Ok(user.into())
}

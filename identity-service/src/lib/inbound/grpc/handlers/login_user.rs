use std::sync::Arc;

use tonic::Status;

use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::IdentityService;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login_user<R>(
    service: Arc<IdentityService<R>>,
    request: LoginRequest,
) -> Result<LoginResponse, Status>
where
    R: UserRepository,
{
    let token = service.login(&request.email, &request.password).await?;

    Ok(LoginResponse { token })
}

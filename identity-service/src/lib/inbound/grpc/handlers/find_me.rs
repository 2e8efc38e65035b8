use std::sync::Arc;

use tonic::Status;

use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::IdentityService;
use crate::proto::FindMeRequest;
use crate::proto::FindMeResponse;

pub async fn find_me<R>(
    service: Arc<IdentityService<R>>,
    request: FindMeRequest,
) -> Result<FindMeResponse, Status>
where
    R: UserRepository,
{
    let profile = service.find_me(request.user_id).await?;

    Ok(profile.into())
}

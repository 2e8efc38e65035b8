use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::find_me;
use super::handlers::login_user;
use super::handlers::register_user;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::IdentityService;
use crate::proto::user_service_server::UserService as UserServiceProto;
use crate::proto::FindMeRequest;
use crate::proto::FindMeResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::UserResponse;

pub struct UserGrpcService<R>
where
    R: UserRepository,
{
    service: Arc<IdentityService<R>>,
}

impl<R> UserGrpcService<R>
where
    R: UserRepository,
{
    pub fn new(service: Arc<IdentityService<R>>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> UserServiceProto for UserGrpcService<R>
where
    R: UserRepository,
{
    async fn register_user(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let response =
            register_user::register_user(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn login_user(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login_user::login_user(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn find_me(
        &self,
        request: Request<FindMeRequest>,
    ) -> Result<Response<FindMeResponse>, Status> {
        let response = find_me::find_me(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}

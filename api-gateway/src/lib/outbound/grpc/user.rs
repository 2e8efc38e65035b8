use anyhow::Error;
use tonic::transport::Channel;
use tonic::Status;

use crate::proto::user_service_client::UserServiceClient;
use crate::proto::FindMeRequest;
use crate::proto::FindMeResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::UserResponse;

/// Typed client for the identity backend.
///
/// Holds a multiplexed channel; cloning the generated client per call is
/// cheap, so `&self` methods can run concurrently.
pub struct GrpcUserServiceClient {
    client: UserServiceClient<Channel>,
}

impl GrpcUserServiceClient {
    pub async fn new(url: &str) -> Result<Self, Error> {
        let client = UserServiceClient::connect(url.to_string()).await?;
        Ok(Self { client })
    }

    pub async fn register_user(&self, request: RegisterRequest) -> Result<UserResponse, Status> {
        let mut client = self.client.clone();
        let response = client.register_user(tonic::Request::new(request)).await?;
        Ok(response.into_inner())
    }

    pub async fn login_user(&self, request: LoginRequest) -> Result<LoginResponse, Status> {
        let mut client = self.client.clone();
        let response = client.login_user(tonic::Request::new(request)).await?;
        Ok(response.into_inner())
    }

    pub async fn find_me(&self, request: FindMeRequest) -> Result<FindMeResponse, Status> {
        let mut client = self.client.clone();
        let response = client.find_me(tonic::Request::new(request)).await?;
        Ok(response.into_inner())
    }
}

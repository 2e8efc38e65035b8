pub mod config;
pub mod inbound;
pub mod outbound;

pub mod proto {
    tonic::include_proto!("user");
}

use std::sync::Arc;

use api_gateway::config::Config;
use api_gateway::inbound::http::router::create_router;
use api_gateway::outbound::grpc::GrpcUserServiceClient;
use auth::TokenIssuer;
use axum::http::HeaderValue;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "api-gateway",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        user_service_url = %config.user_service.url,
        allowed_origin = %config.cors.allowed_origin,
        "Configuration loaded"
    );

    let users = Arc::new(GrpcUserServiceClient::new(&config.user_service.url).await?);
    tracing::info!(url = %config.user_service.url, "Connected to user service");

    let token_verifier = Arc::new(TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        config.jwt.issuer.clone(),
    ));

    let allowed_origin: HeaderValue = config.cors.allowed_origin.parse()?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(users, token_verifier, allowed_origin);
    axum::serve(http_listener, application).await?;

    Ok(())
}

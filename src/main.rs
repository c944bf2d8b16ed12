//! Payments gateway service entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use payments_gateway::adapters::events::RedisEventPublisher;
use payments_gateway::adapters::http::{payment_routes, AppState};
use payments_gateway::adapters::stripe::{StripeConfig, StripeGateway};
use payments_gateway::config::AppConfig;
use payments_gateway::domain::WebhookVerifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate()?;

    let publisher = RedisEventPublisher::connect(&config.events.url).await?;

    let gateway = StripeGateway::new(StripeConfig::new(
        config.payment.secret_key.clone(),
        config.payment.success_url.clone(),
        config.payment.cancel_url.clone(),
    ));

    let state = AppState {
        gateway: Arc::new(gateway),
        publisher: Arc::new(publisher),
        verifier: Arc::new(WebhookVerifier::new(config.payment.webhook_secret.clone())),
        ack_on_publish_failure: config.events.ack_on_publish_failure,
    };

    let app = axum::Router::new()
        .nest("/payments", payment_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, test_mode = config.payment.is_test_mode(), "Payments gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}

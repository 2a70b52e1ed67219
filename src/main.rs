//! Sandbox server for the ECOMMPAY integration.
//!
//! Serves the callback and merchant endpoints over in-memory store adapters.

use std::sync::Arc;

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ecommpay_gateway::adapters::memory::{
    BaseUrlStoreRoutes, InMemoryCustomerDirectory, InMemoryOrderStore, InMemorySettingsProvider,
    InMemoryStoreDirectory,
};
use ecommpay_gateway::adapters::{
    ecommpay_router, EcommpayApiClient, EcommpayApiConfig, PaymentAppState,
};
use ecommpay_gateway::config::AppConfig;
use ecommpay_gateway::domain::foundation::CurrencyId;
use ecommpay_gateway::domain::store::Currency;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.server.environment.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    config.validate()?;
    if !config.payment.is_valid() {
        tracing::warn!("Payment credentials are incomplete; gateway operations will be refused");
    }

    let gateway = EcommpayApiClient::new(EcommpayApiConfig {
        base_url: config.gateway.api_base_url()?,
        user_agent: config.gateway.user_agent.clone(),
        timeout: config.gateway.timeout(),
    })?;

    let orders = Arc::new(InMemoryOrderStore::new());
    let state = PaymentAppState {
        settings: Arc::new(InMemorySettingsProvider::new(config.payment.clone())),
        orders: orders.clone(),
        processing: orders,
        customers: Arc::new(InMemoryCustomerDirectory::new()),
        directory: Arc::new(InMemoryStoreDirectory::new(Currency {
            id: CurrencyId::new(1),
            currency_code: config.store.primary_currency_code.clone(),
        })),
        routes: Arc::new(BaseUrlStoreRoutes::new(config.store.base_url()?)),
        gateway: Arc::new(gateway),
        endpoints: config.gateway.payment_page_endpoints()?,
    };

    let app = ecommpay_router()
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    let addr = config.server.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        test_mode = config.payment.test_mode,
        "ECOMMPAY gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

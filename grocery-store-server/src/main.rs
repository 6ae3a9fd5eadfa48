use grocery_store_server::config::AppConfig;
use grocery_store_server::routes::create_router;
use grocery_store_server::server::Server;
use grocery_store_server::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Grocery store customer API - Starting Server");

    let config = AppConfig::from_env()?;
    tracing::debug!(storage = ?config.storage, storage_timeout = ?config.storage_timeout, "configuration loaded");

    let state = AppState::from_config(&config).await?;
    let router = create_router(state);

    Server::new(config.server).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "grocery_store_server=debug,grocery_store_service=debug,tower_http=debug,info",
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

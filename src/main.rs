use tokio::net::TcpListener;
use tracing::info;
use tripboard::config::AppConfig;
use tripboard::error::AppError;
use tripboard::routes::create_router;
use tripboard::services::trips::TripService;
use tripboard::state::AppState;
use tripboard::store::TripStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;

    let store = TripStore::seeded();
    let service = TripService::new(store, config.latency.clone());

    let state = AppState::new(config.clone(), service);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tripboard=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

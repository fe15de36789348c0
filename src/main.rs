use courtside::api::router::create_router;
use courtside::config::AppConfig;
use courtside::{db, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    tracing::info!("Connecting to database...");
    let pool = db::init_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    tracing::info!("Database connected, migrations applied");

    let metrics_handle = metrics::init_metrics();

    let state = AppState {
        db: pool,
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}

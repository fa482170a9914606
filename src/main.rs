use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use products_inventory::infrastructure::AppState;
use products_inventory::{config, db, seed, server};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env may carry RUST_LOG, so load it before the subscriber reads the filter
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "products_inventory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    let db = db::init_db(&config.database_url).await?;

    // Seeding is best-effort
    if config.seed_catalog {
        if let Err(e) = seed::seed_catalog(&db).await {
            tracing::error!("Something went wrong with seeding the database: {}", e);
        }
    } else {
        tracing::info!("Catalog seeding disabled via SEED_CATALOG");
    }

    let app = server::build_router(
        AppState::new(db),
        &config.cors_allowed_origins,
        config.static_dir.as_deref(),
    );

    let port = server::find_available_port(config.port).ok_or("Failed to find available port")?;
    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Products inventory listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

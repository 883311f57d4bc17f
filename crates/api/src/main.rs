use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bakehouse_api::config::ServerConfig;
use bakehouse_api::router::build_app_router;
use bakehouse_api::state::AppState;
use bakehouse_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        cors_origins = ?config.cors_origins,
        "Configuration loaded"
    );

    let pool = prepare_database(config.db_max_connections).await;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .unwrap_or_else(|err| panic!("HOST/PORT do not form a socket address: {err}"));
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|err| panic!("Cannot bind {addr}: {err}"));

    let app = build_app_router(AppState::new(pool.clone(), config.clone()), &config);
    tracing::info!(%addr, "Bakehouse API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    pool.close().await;
    tracing::info!("Shutdown complete");
}

/// Connect, probe, and migrate. Any failure aborts startup.
async fn prepare_database(max_connections: u32) -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = bakehouse_db::create_pool(&url, max_connections)
        .await
        .expect("Failed to connect to database");
    bakehouse_db::health_check(&pool)
        .await
        .expect("Database did not answer the health probe");
    bakehouse_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(max_connections, "Database ready");
    pool
}

/// `RUST_LOG` controls filtering; `LOG_FORMAT=json` emits one JSON object per
/// line instead of the human-readable format.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bakehouse_api=debug,tower_http=info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Interrupt received, draining connections"),
        () = terminate => tracing::info!("SIGTERM received, draining connections"),
    }
}

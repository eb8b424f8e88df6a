use axum::Router;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenvy::dotenv;
use http::HeaderValue;
use std::{env, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use userdir::app::create_router;
use userdir::config::db_config::DbConfig;
use userdir::logging::setup_logging;
use userdir::models::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[tokio::main]
async fn main() -> Result<(), eyre::Error> {
    setup_logging();

    info!("Starting user directory service");

    dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());

    // Process-wide connection pool, built once at startup and dropped on
    // shutdown. Handlers borrow and return connections per request.
    let db_config = DbConfig::from_env()?;
    let pool = db_config.build_pool().map_err(|e| {
        error!("Failed to create database pool: {}", e);
        eyre::eyre!("Failed to create database pool: {}", e)
    })?;

    // Bring the users table up to date with the entity definition.
    {
        let mut conn = pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| eyre::eyre!("Failed to run migrations: {}", e))?;
    }
    info!("Database schema is up to date");

    let state = Arc::new(AppState { db: pool });

    // Permissive CORS unless CORS_ORIGINS narrows it down.
    let cors = match env::var("CORS_ORIGINS") {
        Ok(origins) => {
            let origins = origins
                .split(',')
                .map(|s| s.trim().parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;
            info!("cors origins: {:?}", origins);
            CorsLayer::new()
                .allow_methods(Any)
                .allow_headers(Any)
                .allow_origin(origins)
        }
        Err(_) => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any),
    };

    let app: Router = create_router(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| eyre::eyre!("Invalid listen address: {}", e))?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl-c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

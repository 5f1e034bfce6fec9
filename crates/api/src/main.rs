use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmcrew_api::cli::{Cli, Commands, DbCommands};
use filmcrew_api::config::ServerConfig;
use filmcrew_api::router::build_app_router;
use filmcrew_api::state::AppState;
use filmcrew_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmcrew_api=debug,filmcrew_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::from_env();
    if let Some(url) = &cli.database_url {
        config.database_url = url.clone();
    }

    let pool = connect(&config).await;

    match cli.command() {
        Commands::Serve => serve(pool, config).await,
        Commands::Db {
            task: DbCommands::Migrate,
        } => {
            filmcrew_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            pool.close().await;
        }
        Commands::Db {
            task: DbCommands::Revert { target },
        } => {
            filmcrew_db::revert_migrations(&pool, *target)
                .await
                .expect("Failed to revert database migrations");
            pool.close().await;
        }
    }
}

/// Open the pool and make sure the database answers.
async fn connect(config: &ServerConfig) -> DbPool {
    let pool = filmcrew_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    filmcrew_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!(url = %config.database_url, "Database ready");
    pool
}

async fn serve(pool: DbPool, config: ServerConfig) {
    tracing::info!(
        host = %config.host,
        port = config.port,
        rules = ?config.field_rules,
        "Loaded server configuration"
    );

    filmcrew_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Shut down cleanly");
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received"),
        () = terminate => tracing::info!("SIGTERM received"),
    }
}

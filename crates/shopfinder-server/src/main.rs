mod api;
mod middleware;

use std::sync::Arc;

use shopfinder_search::SearchClient;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::AuthState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = shopfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool_config = shopfinder_db::PoolConfig::from_app_config(&config);
            let pool = shopfinder_db::connect_pool(database_url, pool_config).await?;
            shopfinder_db::run_migrations(&pool).await?;
            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; search history endpoints disabled");
            None
        }
    };

    let search = match config.search_api_key.as_deref() {
        Some(api_key) => Some(Arc::new(SearchClient::with_base_url(
            api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.search_api_url,
        )?)),
        None => {
            tracing::warn!("TAVILY_API_KEY not set; search-shops will report not configured");
            None
        }
    };

    let auth = AuthState::from_env(matches!(
        config.env,
        shopfinder_core::Environment::Development
    ))?;
    let app = build_app(AppState { search, pool }, auth);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "shopfinder-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}

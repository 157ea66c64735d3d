use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repodock::app_state::AppState;
use repodock::cloner::GitCloner;
use repodock::config::Config;
use repodock::{browser, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repodock=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let cloner = Arc::new(GitCloner::new(&config.clone_root));
    let ui_url = config.ui_url();
    let open_browser = !config.no_browser;

    let state = AppState::new(config, cloner);
    let addr = format!("{}:{}", state.config.bind, state.config.port);
    let app = routes::router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server starting on {addr}");

    if open_browser {
        browser::open(&ui_url);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

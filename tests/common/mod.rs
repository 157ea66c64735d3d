//! Shared helpers for the API integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use clap::Parser;

use repodock::app_state::AppState;
use repodock::cloner::Cloner;
use repodock::config::Config;
use repodock::error::RepodockError;
use repodock::routes;

/// Configuration with defaults, short timeout, no browser.
pub fn test_config() -> Config {
    Config::parse_from(["repodock", "--no-browser", "--request-timeout-secs", "5"])
}

pub fn app_with(config: Config, cloner: Arc<dyn Cloner>) -> Router {
    routes::router(AppState::new(config, cloner))
}

/// App with a clone backend that must not be reached.
pub fn test_app() -> Router {
    app_with(test_config(), Arc::new(UnreachableCloner))
}

/// Serve a mock upstream API on an ephemeral port, returning its base URL.
pub async fn spawn_mock_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

pub struct UnreachableCloner;

#[async_trait]
impl Cloner for UnreachableCloner {
    async fn clone_repository(&self, _: &str, _: &str, _: &str) -> repodock::Result<PathBuf> {
        panic!("clone backend reached by a request that should not clone");
    }
}

/// Clone backend that never completes, like an unresponsive remote.
pub struct HangingCloner;

#[async_trait]
impl Cloner for HangingCloner {
    async fn clone_repository(&self, _: &str, _: &str, _: &str) -> repodock::Result<PathBuf> {
        std::future::pending().await
    }
}

/// Clone backend that always fails with the given message.
pub struct FailingCloner(pub &'static str);

#[async_trait]
impl Cloner for FailingCloner {
    async fn clone_repository(&self, _: &str, _: &str, _: &str) -> repodock::Result<PathBuf> {
        Err(RepodockError::Clone(self.0.to_string()))
    }
}

/// Clone backend that reports success without touching disk.
pub struct StubCloner;

#[async_trait]
impl Cloner for StubCloner {
    async fn clone_repository(
        &self,
        repo_url: &str,
        _: &str,
        _: &str,
    ) -> repodock::Result<PathBuf> {
        Ok(PathBuf::from("/tmp/repos").join(repo_url.rsplit('/').next().unwrap_or("repo")))
    }
}

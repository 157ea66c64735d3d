pub mod github;
pub mod gitlab;
pub mod repo;

use std::str::FromStr;

use crate::config::Config;
use crate::error::RepodockError;
use crate::Result;

pub use repo::{Repo, RepoListResponse};

/// Hosted git platform a `/list` request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Github,
    Gitlab,
}

impl FromStr for Service {
    type Err = RepodockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Service::Github),
            "gitlab" => Ok(Service::Gitlab),
            _ => Err(RepodockError::UnsupportedService),
        }
    }
}

pub async fn list_repositories(
    config: &Config,
    service: Service,
    group_path: &str,
    token: &str,
) -> Result<Vec<Repo>> {
    match service {
        Service::Github => github::list_repositories(config, group_path, token).await,
        Service::Gitlab => gitlab::list_repositories(config, group_path, token).await,
    }
}

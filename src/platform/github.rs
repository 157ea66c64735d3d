use octocrab::Octocrab;
use serde::Deserialize;

use crate::config::Config;
use crate::error::RepodockError;
use crate::Result;

use super::Repo;

/// Fields we care about from the GitHub repository listing.
#[derive(Deserialize)]
struct GithubRepo {
    name: String,
    html_url: String,
}

/// List the repositories of a GitHub account or organization.
///
/// Only the first page is fetched; large accounts are truncated to
/// GitHub's default page size.
pub async fn list_repositories(config: &Config, owner: &str, token: &str) -> Result<Vec<Repo>> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(base) = &config.github_api_base {
        builder = builder
            .base_uri(base)
            .map_err(|e| RepodockError::List(e.to_string()))?;
    }

    let client = builder
        .build()
        .map_err(|e| RepodockError::List(e.to_string()))?;

    tracing::debug!("Listing GitHub repositories for {owner}");

    let repos: Vec<GithubRepo> = client
        .get(format!("/users/{owner}/repos"), None::<&()>)
        .await
        .map_err(|e| RepodockError::List(e.to_string()))?;

    Ok(repos
        .into_iter()
        .map(|repo| Repo {
            name: repo.name,
            url: repo.html_url,
        })
        .collect())
}

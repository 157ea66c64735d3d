use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::RepodockError;
use crate::Result;

use super::Repo;

#[derive(Deserialize)]
struct GitlabProject {
    name: String,
    web_url: String,
}

/// List the projects under a GitLab group via the v4 REST API.
///
/// Default listing options, first page only.
pub async fn list_repositories(
    config: &Config,
    group_path: &str,
    token: &str,
) -> Result<Vec<Repo>> {
    let url = projects_url(&config.gitlab_api_base, group_path)?;

    tracing::debug!("Listing GitLab projects under {group_path}");

    let response = reqwest::Client::new()
        .get(&url)
        .header("PRIVATE-TOKEN", token)
        .send()
        .await
        .map_err(|e| RepodockError::List(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RepodockError::List(format!("GitLab API: {status}: {body}")));
    }

    let projects: Vec<GitlabProject> = response
        .json()
        .await
        .map_err(|e| RepodockError::List(e.to_string()))?;

    Ok(projects
        .into_iter()
        .map(|project| Repo {
            name: project.name,
            url: project.web_url,
        })
        .collect())
}

/// The group path goes into the URL as a single path segment, so all of
/// its reserved characters, subgroup slashes included, are percent-encoded.
fn projects_url(base: &str, group_path: &str) -> Result<String> {
    let mut url = Url::parse(base).map_err(|e| RepodockError::List(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| RepodockError::List(format!("invalid GitLab base URL: {base}")))?
        .pop_if_empty()
        .extend(["api", "v4", "groups", group_path, "projects"]);

    Ok(url.into())
}

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use git2::build::RepoBuilder;
use git2::{Cred, FetchOptions, RemoteCallbacks};
use url::Url;

use crate::error::RepodockError;
use crate::Result;

/// Clone backend seam, so handlers can be exercised without touching
/// the network.
#[async_trait]
pub trait Cloner: Send + Sync {
    async fn clone_repository(
        &self,
        repo_url: &str,
        username: &str,
        password: &str,
    ) -> Result<PathBuf>;
}

/// git2-backed implementation cloning into `<clone_root>/<repo name>`.
pub struct GitCloner {
    clone_root: PathBuf,
}

impl GitCloner {
    pub fn new(clone_root: impl Into<PathBuf>) -> Self {
        Self {
            clone_root: clone_root.into(),
        }
    }
}

#[async_trait]
impl Cloner for GitCloner {
    async fn clone_repository(
        &self,
        repo_url: &str,
        username: &str,
        password: &str,
    ) -> Result<PathBuf> {
        let target = self.clone_root.join(repo_dir_name(repo_url)?);

        tracing::info!("Cloning {repo_url} into {}", target.display());

        let repo_url = repo_url.to_string();
        let username = username.to_string();
        let password = password.to_string();

        // git2 is blocking, keep it off the async workers.
        tokio::task::spawn_blocking(move || clone_blocking(&repo_url, &username, &password, &target))
            .await
            .map_err(|e| RepodockError::Clone(e.to_string()))?
    }
}

fn clone_blocking(
    repo_url: &str,
    username: &str,
    password: &str,
    target: &Path,
) -> Result<PathBuf> {
    let username = username.to_string();
    let password = password.to_string();

    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, _user_from_url, _allowed| {
        Cred::userpass_plaintext(&username, &password)
    });
    callbacks.sideband_progress(|data| {
        let _ = std::io::stdout().write_all(data);
        true
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    RepoBuilder::new()
        .fetch_options(fetch_options)
        .clone(repo_url, target)
        .map_err(|e| RepodockError::Clone(e.message().to_string()))?;

    Ok(target.to_path_buf())
}

/// Derive the clone directory name from the last path segment of the
/// repository URL, without a trailing `.git`.
fn repo_dir_name(repo_url: &str) -> Result<String> {
    let url = Url::parse(repo_url).map_err(|e| RepodockError::Clone(e.to_string()))?;

    let name = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(|segment| segment.strip_suffix(".git").unwrap_or(segment).to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            RepodockError::Clone(format!("repository URL has no path: {repo_url}"))
        })?;

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_name_comes_from_last_url_segment() {
        assert_eq!(
            repo_dir_name("https://github.com/acme/api.git").unwrap(),
            "api"
        );
        assert_eq!(repo_dir_name("https://gitlab.com/acme/web").unwrap(), "web");
        assert_eq!(
            repo_dir_name("https://gitlab.com/acme/web/").unwrap(),
            "web"
        );
    }

    #[test]
    fn only_one_git_suffix_is_stripped() {
        assert_eq!(
            repo_dir_name("https://github.com/acme/repo.git.git").unwrap(),
            "repo.git"
        );
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(repo_dir_name("https://github.com").is_err());
        assert!(repo_dir_name("not a url").is_err());
    }

    #[tokio::test]
    async fn clones_a_local_repository() {
        let source = tempfile::tempdir().unwrap();
        let clone_root = tempfile::tempdir().unwrap();

        let source_path = source.path().join("fixture");
        std::fs::create_dir(&source_path).unwrap();

        let repo = git2::Repository::init(&source_path).unwrap();
        std::fs::write(source_path.join("README.md"), "fixture\n").unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let signature = git2::Signature::now("tester", "tester@example.com").unwrap();
        repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
            .unwrap();

        let repo_url = Url::from_file_path(&source_path).unwrap();
        let cloner = GitCloner::new(clone_root.path());

        let target = cloner
            .clone_repository(repo_url.as_str(), "user", "password")
            .await
            .unwrap();

        assert_eq!(target, clone_root.path().join("fixture"));
        assert!(target.join("README.md").exists());
    }

    #[tokio::test]
    async fn cloning_twice_fails_on_existing_target() {
        let clone_root = tempfile::tempdir().unwrap();
        std::fs::create_dir(clone_root.path().join("api")).unwrap();
        std::fs::write(clone_root.path().join("api/occupied"), "x").unwrap();

        let cloner = GitCloner::new(clone_root.path());
        let err = cloner
            .clone_repository("https://github.com/acme/api.git", "user", "password")
            .await
            .unwrap_err();

        assert!(matches!(err, RepodockError::Clone(_)));
    }
}

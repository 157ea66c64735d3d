use serde::{Deserialize, Serialize};

/// Minimal repository shape both platform adapters map into.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Repo {
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RepoListResponse {
    pub repos: Vec<Repo>,
}

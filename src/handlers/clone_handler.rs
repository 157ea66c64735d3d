use std::time::Duration;

use axum::extract::{Query, State};
use axum::Form;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::RepodockError;
use crate::Result;

use super::required;

pub const CLONE_SUCCESS_MESSAGE: &str = "Repositório clonado com sucesso!";

#[derive(Debug, Deserialize, Default)]
pub struct CloneParams {
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn clone_query_handler(
    State(state): State<AppState>,
    Query(params): Query<CloneParams>,
) -> Result<&'static str> {
    clone_repository(state, params).await
}

pub async fn clone_form_handler(
    State(state): State<AppState>,
    Form(params): Form<CloneParams>,
) -> Result<&'static str> {
    clone_repository(state, params).await
}

async fn clone_repository(state: AppState, params: CloneParams) -> Result<&'static str> {
    let repo_url = required(params.repo_url)?;
    let username = required(params.username)?;
    let password = required(params.password)?;

    let deadline = Duration::from_secs(state.config.request_timeout_secs);
    let target = tokio::time::timeout(
        deadline,
        state.cloner.clone_repository(&repo_url, &username, &password),
    )
    .await
    .map_err(|_| {
        RepodockError::Clone(format!("timed out after {}s", deadline.as_secs()))
    })??;

    tracing::info!("Cloned {repo_url} into {}", target.display());

    Ok(CLONE_SUCCESS_MESSAGE)
}

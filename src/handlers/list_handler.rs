use std::time::Duration;

use axum::extract::{Query, State};
use axum::{Form, Json};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::RepodockError;
use crate::platform::{self, RepoListResponse, Service};
use crate::Result;

use super::required;

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub group_path: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

pub async fn list_query_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<RepoListResponse>> {
    list_repositories(state, params).await
}

pub async fn list_form_handler(
    State(state): State<AppState>,
    Form(params): Form<ListParams>,
) -> Result<Json<RepoListResponse>> {
    list_repositories(state, params).await
}

async fn list_repositories(
    state: AppState,
    params: ListParams,
) -> Result<Json<RepoListResponse>> {
    let service = required(params.service)?;
    let group_path = required(params.group_path)?;
    let token = required(params.token)?;
    let service = service.parse::<Service>()?;

    tracing::info!("Listing {service:?} repositories under {group_path}");

    let deadline = Duration::from_secs(state.config.request_timeout_secs);
    let repos = tokio::time::timeout(
        deadline,
        platform::list_repositories(&state.config, service, &group_path, &token),
    )
    .await
    .map_err(|_| {
        RepodockError::List(format!("timed out after {}s", deadline.as_secs()))
    })??;

    Ok(Json(RepoListResponse { repos }))
}

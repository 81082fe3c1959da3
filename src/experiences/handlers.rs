use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    dto::MessageResponse,
    error::ApiError,
    extractors::ValidJson,
    models::{Experience, NewExperience},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/experience", get(list_experiences))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/experience", post(create_experience))
        .route(
            "/experience/:id",
            put(update_experience).delete(delete_experience),
        )
}

#[instrument(skip(state))]
pub async fn list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    let exps = state.repo.list_experiences().await.map_err(|e| {
        error!(error = %e, "list experiences failed");
        ApiError::Internal("Failed to fetch experiences")
    })?;
    Ok(Json(exps))
}

#[instrument(skip(state, exp))]
pub async fn create_experience(
    State(state): State<AppState>,
    ValidJson(exp): ValidJson<NewExperience>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state.repo.create_experience(&exp).await.map_err(|e| {
        error!(error = %e, company = %exp.company, "create experience failed");
        ApiError::Internal("Failed to create experience")
    })?;
    info!(%id, company = %exp.company, projects = exp.projects.len(), "experience created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Experience created successfully")),
    ))
}

#[instrument(skip(state, exp))]
pub async fn update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(exp): ValidJson<NewExperience>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repo.update_experience(&id, &exp).await.map_err(|e| {
        error!(error = %e, %id, "update experience failed");
        ApiError::Repo(e)
    })?;
    info!(%id, "experience updated");
    Ok(Json(MessageResponse::new("Experience updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete_experience(&id).await.map_err(|e| {
        error!(error = %e, %id, "delete experience failed");
        ApiError::Repo(e)
    })?;
    info!(%id, "experience deleted");
    Ok(StatusCode::NO_CONTENT)
}

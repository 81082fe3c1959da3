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
    models::{NewTechnology, Technology},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/tech", get(list_technologies))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/tech", post(create_technology))
        .route(
            "/tech/:id",
            put(update_technology).delete(delete_technology),
        )
}

#[instrument(skip(state))]
pub async fn list_technologies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technology>>, ApiError> {
    let techs = state.repo.list_technologies().await.map_err(|e| {
        error!(error = %e, "list technologies failed");
        ApiError::Internal("Failed to fetch technologies")
    })?;
    Ok(Json(techs))
}

#[instrument(skip(state, tech))]
pub async fn create_technology(
    State(state): State<AppState>,
    ValidJson(tech): ValidJson<NewTechnology>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state.repo.create_technology(&tech).await.map_err(|e| {
        error!(error = %e, name = %tech.name, "create technology failed");
        ApiError::Internal("Failed to create technology")
    })?;
    info!(%id, name = %tech.name, "technology created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Technology created successfully")),
    ))
}

#[instrument(skip(state, tech))]
pub async fn update_technology(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(tech): ValidJson<NewTechnology>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repo.update_technology(&id, &tech).await.map_err(|e| {
        error!(error = %e, %id, "update technology failed");
        ApiError::Repo(e)
    })?;
    info!(%id, "technology updated");
    Ok(Json(MessageResponse::new("Technology updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_technology(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete_technology(&id).await.map_err(|e| {
        error!(error = %e, %id, "delete technology failed");
        ApiError::Repo(e)
    })?;
    info!(%id, "technology deleted");
    Ok(StatusCode::NO_CONTENT)
}

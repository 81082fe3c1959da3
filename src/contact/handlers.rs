use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info, instrument};

use crate::{
    dto::MessageResponse, error::ApiError, extractors::ValidJson, models::ContactRequest,
    state::AppState,
};

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(send_contact))
}

#[instrument(skip(state, req))]
pub async fn send_contact(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ContactRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state
        .contact
        .process_contact_message(req)
        .await
        .map_err(|e| {
            error!(error = %e, "process contact message failed");
            ApiError::Internal("Failed to process message")
        })?;
    info!(%id, "contact message received");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Message received successfully")),
    ))
}

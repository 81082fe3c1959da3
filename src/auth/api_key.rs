use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

use crate::{error::ApiError, state::AppState};

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Admin gate. Fails closed when the server has no key configured,
/// otherwise requires an exact match on the `X-API-KEY` header.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.config.api_key.as_deref() else {
        error!(method = %request.method(), uri = %request.uri(), "API_KEY not configured; admin route blocked");
        return Err(ApiError::ApiKeyNotConfigured);
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => {
            warn!(method = %request.method(), uri = %request.uri(), "invalid api key");
            Err(ApiError::Unauthorized)
        }
        None => {
            warn!(method = %request.method(), uri = %request.uri(), "missing api key");
            Err(ApiError::Unauthorized)
        }
    }
}

pub mod handlers;

use crate::state::AppState;
use axum::Router;

pub fn read_router() -> Router<AppState> {
    handlers::read_routes()
}

/// Mutating routes; mounted behind the admin gate.
pub fn write_router() -> Router<AppState> {
    handlers::write_routes()
}

use super::{building_server::AppState, handlers};
use axum::{
	routing::{get, post, put},
	Router,
};

/// Compose the public API surface.
pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(handlers::health))
		.route("/buildings", put(handlers::buildings_nearby))
		.route("/buildings/address", put(handlers::building_by_address))
		.route("/upload", post(handlers::upload_model))
		.route("/model/:id", get(handlers::get_model))
		.with_state(state)
}

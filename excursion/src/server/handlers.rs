use super::building_server::AppState;
use axum::{
	body::Body,
	extract::{Multipart, Path, State},
	http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use excursion_catalog::{query, Building, CatalogError, CatalogSnapshot};
use excursion_geometry::{apply_regional_correction, Point};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionDto {
	pub x: f64,
	pub z: f64,
}

#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
	pub position: PositionDto,
	pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
	pub address: String,
}

/// Building as presented to the viewer.
///
/// Coordinates carry the presentation sign flip on top of the catalog's
/// internal correction: the viewer's display space uses the dataset's
/// original X convention.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDto {
	pub id: Uuid,
	pub source_id: String,
	pub position: PositionDto,
	pub address: Option<String>,
	pub height: Option<f64>,
	pub boundary: Vec<PositionDto>,
}

impl From<&Building> for BuildingDto {
	fn from(building: &Building) -> Self {
		let display = |p: &Point| {
			let p = apply_regional_correction(*p);
			PositionDto { x: p.x, z: p.z }
		};
		Self {
			id: building.stable_id,
			source_id: building.source_id.clone(),
			position: display(&building.center),
			address: building.address.clone(),
			height: building.height,
			boundary: building.boundary.iter().map(display).collect(),
		}
	}
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
	(status, Json(json!({ "error": message.to_string() }))).into_response()
}

/// Fetch the current snapshot off the async runtime; the cache may block on
/// a reload.
async fn snapshot(state: &AppState) -> Result<Arc<CatalogSnapshot>, Response> {
	let cache = Arc::clone(&state.cache);
	tokio::task::spawn_blocking(move || cache.snapshot())
		.await
		.map_err(|_| error_response(StatusCode::INTERNAL_SERVER_ERROR, "catalog unavailable"))
}

pub async fn health(State(state): State<AppState>) -> Response {
	match snapshot(&state).await {
		Ok(snapshot) => Json(json!({ "status": "ok", "buildings": snapshot.buildings.len() })).into_response(),
		Err(response) => response,
	}
}

/// `PUT /buildings` — buildings around a point, nearest first.
pub async fn buildings_nearby(State(state): State<AppState>, Json(request): Json<NearbyRequest>) -> Response {
	let snapshot = match snapshot(&state).await {
		Ok(snapshot) => snapshot,
		Err(response) => return response,
	};

	let center = Point::new(request.position.x, request.position.z);
	match query::find_nearby(&snapshot.buildings, &center, request.distance) {
		Ok(buildings) => Json(buildings.iter().map(|b| BuildingDto::from(*b)).collect::<Vec<_>>()).into_response(),
		Err(error @ CatalogError::InvalidRegion { .. }) => error_response(StatusCode::UNPROCESSABLE_ENTITY, error),
		Err(error) => error_response(StatusCode::INTERNAL_SERVER_ERROR, error),
	}
}

/// `PUT /buildings/address` — exact address lookup.
pub async fn building_by_address(State(state): State<AppState>, Json(request): Json<AddressRequest>) -> Response {
	let snapshot = match snapshot(&state).await {
		Ok(snapshot) => snapshot,
		Err(response) => return response,
	};

	match query::find_by_address(&snapshot.buildings, &request.address) {
		Some(building) => Json(BuildingDto::from(building)).into_response(),
		None => error_response(StatusCode::NOT_FOUND, format!("no building at address {:?}", request.address)),
	}
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
	headers
		.get(axum::http::header::AUTHORIZATION)?
		.to_str()
		.ok()?
		.strip_prefix("Bearer ")
}

/// `POST /upload` — store a model binary (Creator/Admin only).
pub async fn upload_model(
	State(state): State<AppState>, headers: HeaderMap, mut multipart: Multipart,
) -> Response {
	let principal = match state.auth.validate(bearer_token(&headers)).await {
		Ok(principal) => principal,
		Err(error) => return error_response(StatusCode::UNAUTHORIZED, error),
	};
	if !principal.role.can_manage_content() {
		return error_response(StatusCode::FORBIDDEN, "uploading requires the Creator or Admin role");
	}

	loop {
		let field = match multipart.next_field().await {
			Ok(Some(field)) => field,
			Ok(None) => break,
			Err(error) => return error_response(StatusCode::BAD_REQUEST, error),
		};
		if field.name() != Some("file") {
			continue;
		}
		let name = match field.file_name() {
			Some(name) => name.to_string(),
			None => return error_response(StatusCode::BAD_REQUEST, "file field has no filename"),
		};
		let content_type = field
			.content_type()
			.map(str::to_string)
			.unwrap_or_else(|| mime_guess::from_path(&name).first_or_octet_stream().to_string());
		let content = match field.bytes().await {
			Ok(content) => content,
			Err(error) => return error_response(StatusCode::BAD_REQUEST, error),
		};

		return match state.store.upload(&name, content, &content_type).await {
			Ok(()) => Json(json!({ "id": name })).into_response(),
			Err(error) => error_response(StatusCode::BAD_REQUEST, error),
		};
	}

	error_response(StatusCode::BAD_REQUEST, "multipart field 'file' is missing")
}

/// `GET /model/{id}` — stored model bytes with their content type.
pub async fn get_model(State(state): State<AppState>, Path(id): Path<String>) -> Response {
	match state.store.download(&id).await {
		Ok(Some((content, content_type))) => Response::builder()
			.header(CONTENT_TYPE, content_type)
			.body(Body::from(content))
			.unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
		Ok(None) => error_response(StatusCode::NOT_FOUND, format!("unknown model {id:?}")),
		Err(error) => error_response(StatusCode::BAD_REQUEST, error),
	}
}

//! CORS layer from configured origin patterns.
//!
//! Supported `allowed_origins` forms:
//! - `"*"`        → allow all origins
//! - `"*suffix"`  → suffix match
//! - `"prefix*"`  → prefix match
//! - exact strings like `"https://viewer.example.org"`

use axum::http::{header::HeaderValue, request::Parts};
use tower_http::cors::{AllowOrigin, CorsLayer};

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync + 'static>;

pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
	let checks: Vec<Predicate> = allowed_origins
		.iter()
		.map(|pattern| -> Predicate {
			if pattern == "*" {
				Box::new(|_| true)
			} else if let Some(suffix) = pattern.strip_prefix('*') {
				let suffix = suffix.to_string();
				Box::new(move |origin| origin.ends_with(&suffix))
			} else if let Some(prefix) = pattern.strip_suffix('*') {
				let prefix = prefix.to_string();
				Box::new(move |origin| origin.starts_with(&prefix))
			} else {
				let exact = pattern.clone();
				Box::new(move |origin| origin == exact)
			}
		})
		.collect();

	CorsLayer::new().allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _req: &Parts| {
		let origin = origin.to_str().unwrap_or("");
		checks.iter().any(|check| check(origin))
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{body::Body, http::Request, routing::get, Router};
	use tower::ServiceExt;

	async fn allowed(patterns: &[&str], origin: &str) -> bool {
		let layer = build_cors_layer(&patterns.iter().map(|p| p.to_string()).collect::<Vec<_>>());
		let router = Router::new().route("/", get(|| async { "ok" })).layer(layer);
		let response = router
			.oneshot(Request::builder().uri("/").header("Origin", origin).body(Body::empty()).unwrap())
			.await
			.unwrap();
		response.headers().contains_key("access-control-allow-origin")
	}

	#[tokio::test]
	async fn pattern_forms() {
		assert!(allowed(&["*"], "https://anything.example").await);
		assert!(allowed(&["*.example.org"], "https://viewer.example.org").await);
		assert!(allowed(&["https://viewer.*"], "https://viewer.example.org").await);
		assert!(allowed(&["https://exact.example.org"], "https://exact.example.org").await);
		assert!(!allowed(&["https://exact.example.org"], "https://other.example.org").await);
		assert!(!allowed(&[], "https://any.example.org").await);
	}
}

use super::{
	auth::{AllowAll, TokenValidator},
	cors::build_cors_layer,
	routes::build_router,
	storage::{DirStore, ObjectStore},
};
use crate::config::Config;
use anyhow::{Context, Result};
use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError};
use excursion_catalog::{BuildingCache, CatalogLoader, DEFAULT_CACHE_TTL};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};
use tower::{load_shed::LoadShedLayer, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared handler state: the catalog cache plus the two external
/// collaborator seams.
#[derive(Clone)]
pub struct AppState {
	pub cache: Arc<BuildingCache>,
	pub store: Arc<dyn ObjectStore>,
	pub auth: Arc<dyn TokenValidator>,
}

/// Thin orchestration layer for the excursion HTTP server.
///
/// Stores configuration and composes the router with its global middleware
/// stack; request handling lives in `handlers`/`routes`. Guarantees:
/// - **Idempotent start/stop**: starting twice stops the previous instance;
///   stopping twice is a no-op.
/// - **Graceful shutdown**: in-flight requests finish before `stop` returns.
pub struct BuildingServer {
	ip: String,
	port: u16,
	state: AppState,
	cors_allowed_origins: Vec<String>,
	/// One-shot channel signalling graceful shutdown to the serving task.
	exit_signal: Option<oneshot::Sender<()>>,
	/// Join handle of the serving task; awaited in `stop()`.
	join: Option<tokio::task::JoinHandle<()>>,
}

impl BuildingServer {
	/// Construct a server from `Config`, wiring the catalog cache and the
	/// directory-backed model store. `validator` is the deployment's token
	/// validator; pass [`AllowAll`] for standalone use.
	pub fn from_config(config: &Config, validator: Arc<dyn TokenValidator>) -> Result<BuildingServer> {
		let loader = match &config.dataset.path {
			Some(path) => CatalogLoader::with_path(path.clone()),
			None => CatalogLoader::new(),
		};
		let ttl = config
			.dataset
			.cache_ttl_seconds
			.map(Duration::from_secs)
			.unwrap_or(DEFAULT_CACHE_TTL);

		let models_dir = config
			.storage
			.models_dir
			.clone()
			.unwrap_or_else(|| PathBuf::from("models"));
		let store = DirStore::new(models_dir)?;

		Ok(BuildingServer {
			ip: config.server.ip.clone().unwrap_or_else(|| "0.0.0.0".to_string()),
			port: config.server.port.unwrap_or(8080),
			state: AppState {
				cache: Arc::new(BuildingCache::new(loader, ttl)),
				store: Arc::new(store),
				auth: validator,
			},
			cors_allowed_origins: config.cors.allowed_origins.clone(),
			exit_signal: None,
			join: None,
		})
	}

	pub fn standalone(config: &Config) -> Result<BuildingServer> {
		Self::from_config(config, Arc::new(AllowAll))
	}

	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() {
			self.stop().await;
		}

		log::info!("starting server");

		let router = build_router(self.state.clone())
			.layer(
				ServiceBuilder::new()
					.layer(CatchPanicLayer::new())
					.layer(HandleErrorLayer::new(handle_middleware_error))
					.layer(LoadShedLayer::new())
					.layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
			)
			.layer(build_cors_layer(&self.cors_allowed_origins));

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = TcpListener::bind(&addr)
			.await
			.with_context(|| format!("binding to {addr}"))?;
		eprintln!("server starts listening on {addr}");

		let (tx, rx) = oneshot::channel::<()>();
		let join = tokio::spawn(async move {
			if let Err(error) = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await
			{
				log::error!("server error: {error}");
			}
		});

		self.exit_signal = Some(tx);
		self.join = Some(join);

		Ok(())
	}

	pub async fn stop(&mut self) {
		let Some(exit_signal) = self.exit_signal.take() else {
			return;
		};

		log::info!("stopping server");
		exit_signal.send(()).ok();
		if let Some(join) = self.join.take() {
			join.await.ok();
		}
	}
}

async fn handle_middleware_error(error: BoxError) -> StatusCode {
	if error.is::<tower::load_shed::error::Overloaded>() {
		StatusCode::SERVICE_UNAVAILABLE
	} else if error.is::<tower::timeout::error::Elapsed>() {
		StatusCode::REQUEST_TIMEOUT
	} else {
		StatusCode::INTERNAL_SERVER_ERROR
	}
}

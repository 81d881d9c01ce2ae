pub mod handlers;
mod pages;

use crate::engine::{Classifier, TractEngine};
use crate::uploads::UploadStore;
use crate::{classes, config::Config, Error, Result};
use axum::{Router, routing::get};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::AppState;

/// Build the application router. Split out from [`run`] so tests can drive
/// the routes with an in-memory engine.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route(
            "/predict",
            get(handlers::predict_form).post(handlers::predict),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The class-name table is aligned with the output vector purely by
/// position, so a model with a different number of classes must be rejected
/// before the first request is served.
pub fn validate_output_dim(engine: &dyn Classifier) -> Result<()> {
    if engine.output_len() != classes::CLASS_NAMES.len() {
        return Err(Error::model(format!(
            "model produces {} classes but the class-name table has {}",
            engine.output_len(),
            classes::CLASS_NAMES.len()
        )));
    }
    Ok(())
}

pub async fn run(config: Config) -> Result<()> {
    // Load the engine first: if the artifact is missing or unreadable the
    // process must die here, never serve degraded.
    let engine = TractEngine::load(Path::new(&config.model.artifact_path))?;

    validate_output_dim(&engine)?;

    let store = UploadStore::ensure(&config.uploads.dir).await?;

    let state = AppState {
        engine: Arc::new(Mutex::new(Box::new(engine))),
        store: Arc::new(store),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

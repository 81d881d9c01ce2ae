use super::pages;
use crate::engine::{self, Classifier};
use crate::uploads::UploadStore;
use crate::{classes, preprocess};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Box<dyn Classifier>>>,
    pub store: Arc<UploadStore>,
}

pub async fn home() -> Html<String> {
    pages::home()
}

pub async fn about() -> Html<String> {
    pages::about()
}

pub async fn predict_form() -> Html<String> {
    pages::predict_form()
}

/// Predict path: sanitize and persist the upload, preprocess it into the
/// model's input tensor, run one inference pass and render the top label.
/// Client mistakes are 400s, storage and processing failures are 500s with
/// the underlying error text.
pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid multipart body. Error: {e}"),
        )
    })? {
        if field.name() == Some("foto") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read upload. Error: {e}"),
                    )
                })?
                .to_vec();
            upload = Some((filename, bytes));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err((StatusCode::BAD_REQUEST, "No file uploaded".to_string()));
    };

    if filename.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No selected file".to_string()));
    }

    let stored_path = state.store.save(&filename, &bytes).await.map_err(|e| {
        error!("Failed to save upload '{}': {}", filename, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to save file. Error: {e}"),
        )
    })?;

    let scores = async {
        let tensor = preprocess::image_to_tensor(&bytes)?;
        let engine = state.engine.lock().await;
        engine.run(tensor)
    }
    .await
    .map_err(|e| {
        error!("Failed to classify {}: {}", stored_path.display(), e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to process image for prediction. Error: {e}"),
        )
    })?;

    let index = engine::argmax(&scores).ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Model returned an empty output vector".to_string(),
        )
    })?;

    let label = classes::label(index).ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Predicted index {index} has no class name"),
        )
    })?;

    info!("Predicted '{}' for {}", label, stored_path.display());

    Ok(pages::prediction(label, &stored_path))
}

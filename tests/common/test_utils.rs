use super::mocks::MockEngine;
use axum::{Router, body::Body, http::Request};
use fruitsight::engine::Classifier;
use fruitsight::server::{self, AppState};
use fruitsight::uploads::UploadStore;
use image::{Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

const BOUNDARY: &str = "fruitsight-test-boundary";

/// Build a test router around a canned engine and a temp upload directory.
pub async fn create_test_app(scores: Vec<f32>) -> (Router, TempDir) {
    create_test_app_with_engine(Box::new(MockEngine { scores })).await
}

pub async fn create_test_app_with_engine(engine: Box<dyn Classifier>) -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::ensure(temp_dir.path().join("uploads"))
        .await
        .unwrap();

    let state = AppState {
        engine: Arc::new(Mutex::new(engine)),
        store: Arc::new(store),
    };

    (server::router(state), temp_dir)
}

/// Build a multipart POST with a single field. `filename: None` produces a
/// bare form field without a filename attribute.
pub fn multipart_request(
    uri: &str,
    field_name: &str,
    filename: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    let disposition = match filename {
        Some(name) => format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{name}\"\r\n"
        ),
        None => format!("Content-Disposition: form-data; name=\"{field_name}\"\r\n"),
    };
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Encode a solid-color PNG in memory.
pub fn png_image_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([230, 190, 40]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Number of files sitting in the test app's upload directory.
pub fn upload_count(temp_dir: &TempDir) -> usize {
    std::fs::read_dir(temp_dir.path().join("uploads"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

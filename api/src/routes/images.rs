//! Lesson image serving.
//!
//! Serves image files referenced by lessons from the configured storage
//! root, in the same style as any other static asset handler: existence
//! check first, then open and read, with JSON errors throughout.

use axum::{
    Json,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tokio::{fs::File as FsFile, io::AsyncReadExt};

use crate::response::ApiResponse;
use util::paths::image_path;

/// GET /images/{filename}
///
/// Returns the raw bytes of a lesson image with a guessed content type.
/// Filenames are single path segments; anything that tries to walk out of
/// the storage root is treated as absent.
///
/// ### Responses
/// - `200 OK` with the file bytes
/// - `404 Not Found` (unknown filename)
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Image not found"
/// }
/// ```
/// - `500 Internal Server Error` (file could not be opened or read)
pub async fn get_image(Path(filename): Path<String>) -> impl IntoResponse {
    // Route parameters never contain `/`, but reject traversal outright.
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Image not found")),
        )
            .into_response();
    }

    let fs_path = image_path(&filename);

    if tokio::fs::metadata(&fs_path).await.is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Image not found")),
        )
            .into_response();
    }

    let mut file = match FsFile::open(&fs_path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("Could not open image {}: {e}", fs_path.display());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Could not open image")),
            )
                .into_response();
        }
    };

    let mut buffer = Vec::new();
    if let Err(e) = file.read_to_end(&mut buffer).await {
        tracing::error!("Failed to read image {}: {e}", fs_path.display());
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("Failed to read image")),
        )
            .into_response();
    }

    let mime = mime_guess::from_path(&fs_path).first_or_octet_stream();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.to_string())],
        buffer,
    )
        .into_response()
}

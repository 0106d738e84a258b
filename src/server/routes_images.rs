//! Gallery image CRUD routes.
//!
//! List, fetch, upload, rename, and delete endpoints under `/api/v1/images`,
//! plus the mapping from the domain error taxonomy onto HTTP status codes.

use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pixshelf_common::{base64blob, Error, ImageId};
use pixshelf_db::models::Image;
use serde::{Deserialize, Serialize};

use super::AppContext;

/// Create image-related routes.
pub fn image_routes() -> Router<AppContext> {
    Router::new()
        .route("/images", get(list_images).post(create_image))
        .route(
            "/images/:id",
            get(get_image).patch(patch_image).delete(delete_image),
        )
}

// ============================================================================
// Request/response types
// ============================================================================

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListImagesQuery {
    /// When true (the default), the original pixel data is stripped from
    /// each returned record.
    #[serde(rename = "thumbnailsOnly", default = "default_thumbnails_only")]
    pub thumbnails_only: bool,
}

fn default_thumbnails_only() -> bool {
    true
}

/// Listing projection carrying the thumbnail but not the original bytes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSummary {
    id: ImageId,
    name: String,
    #[serde(with = "base64blob")]
    thumbnail_pixel_data: Vec<u8>,
}

impl From<Image> for ImageSummary {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            name: image.name,
            thumbnail_pixel_data: image.thumbnail_pixel_data,
        }
    }
}

/// Body of the rename (PATCH) request.
#[derive(Debug, Deserialize)]
pub struct ImagePatch {
    pub name: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all images.
///
/// Always 200. With `thumbnailsOnly=true` each record is projected down to
/// id, name, and thumbnail bytes.
async fn list_images(
    State(ctx): State<AppContext>,
    Query(query): Query<ListImagesQuery>,
) -> Response {
    match ctx.images.get_all_images() {
        Ok(images) if query.thumbnails_only => {
            let summaries: Vec<ImageSummary> = images.into_iter().map(Into::into).collect();
            Json(summaries).into_response()
        }
        Ok(images) => Json(images).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Get a single image including its original pixel data.
///
/// Unknown ids return 404 with a JSON error body.
async fn get_image(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Response {
    match ctx.images.get_image(ImageId::from(id)) {
        Ok(Some(image)) => Json(image).into_response(),
        Ok(None) => error_response(&Error::not_found(format!("image {}", id))),
        Err(e) => error_response(&e),
    }
}

/// Upload a new image as a multipart form with one file field.
///
/// Returns 201 with a Location header and the created record, thumbnail
/// included. Missing file, empty filename, or empty payload are 400;
/// undecodable image bytes are 422.
async fn create_image(State(ctx): State<AppContext>, mut multipart: Multipart) -> Response {
    // Take the first part that carries a filename.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.file_name().is_some() => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return error_response(&Error::invalid_argument(
                    "the upload contains no file field",
                ))
            }
            Err(e) => {
                return error_response(&Error::invalid_argument(format!(
                    "malformed multipart body: {}",
                    e
                )))
            }
        }
    };

    let file_name = field.file_name().unwrap_or_default().trim().to_string();
    if file_name.is_empty() {
        return error_response(&Error::invalid_argument("the uploaded file has no name"));
    }

    let data = match field.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            return error_response(&Error::invalid_argument(format!(
                "failed to read upload: {}",
                e
            )))
        }
    };
    if data.is_empty() {
        return error_response(&Error::invalid_argument("the uploaded file is empty"));
    }

    let new_image = match ctx.images.parse_upload(data, &file_name) {
        Ok(new_image) => new_image,
        Err(e) => return error_response(&e),
    };

    match ctx.images.add_image(&new_image) {
        Ok(image) => {
            let location = format!("/api/v1/images/{}", image.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(image),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Rename an image.
///
/// 400 on an absent body or an empty or whitespace name, 404 when the id
/// is unknown, otherwise 200 with an empty body. The thumbnail is never
/// regenerated.
async fn patch_image(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    body: Result<Json<ImagePatch>, JsonRejection>,
) -> Response {
    let patch = match body {
        Ok(Json(patch)) => patch,
        Err(_) => {
            return error_response(&Error::invalid_argument(
                "the request body is missing or not valid JSON",
            ))
        }
    };

    let name = patch.name.as_deref().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return error_response(&Error::invalid_argument(
            "the image name is empty or whitespace",
        ));
    }

    let mut image = match ctx.images.get_image(ImageId::from(id)) {
        Ok(Some(image)) => image,
        Ok(None) => return error_response(&Error::not_found("the image to patch does not exist")),
        Err(e) => return error_response(&e),
    };

    image.name = name;
    match ctx.images.update_image(&image) {
        Ok(()) => StatusCode::OK.into_response(),
        // The row can disappear between the read and the write; a clean 404
        // is the contract for a patch racing a delete.
        Err(Error::InvalidArgument(_)) => {
            error_response(&Error::not_found("the image to patch does not exist"))
        }
        Err(e) => error_response(&e),
    }
}

/// Delete an image. Always 204; deleting an unknown id is a no-op.
async fn delete_image(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Response {
    match ctx.images.remove_image(ImageId::from(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Map a domain error onto an HTTP status with a JSON error body.
fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Database(_) | Error::Io(_) | Error::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

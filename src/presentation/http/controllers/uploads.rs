// src/presentation/http/controllers/uploads.rs
use crate::application::{commands::uploads::UploadImageCommand, dto::UploadedImageDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadParams {
    /// Original file name; only its extension is kept.
    pub filename: String,
}

#[utoipa::path(
    post,
    path = "/api/uploads/images",
    params(UploadParams),
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Image stored.", body = UploadedImageDto),
        (status = 400, description = "Unsupported type, empty or oversized file.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Uploads"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<UploadParams>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<UploadedImageDto>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let command = UploadImageCommand {
        file_name: params.filename,
        content_type,
        data: body,
    };

    let uploaded = state
        .services
        .uploads
        .upload_image(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}

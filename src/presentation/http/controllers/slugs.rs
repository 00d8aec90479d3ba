// src/presentation/http/controllers/slugs.rs
use crate::application::{dto::SlugCheckDto, queries::slugs::CheckSlugQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlugCheckParams {
    /// `post` or `category`.
    pub kind: String,
    pub slug: String,
    /// Entity being edited; its own slug does not count as taken.
    #[serde(default)]
    pub exclude_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/slugs/check",
    params(SlugCheckParams),
    responses(
        (status = 200, description = "Validity and availability of the slug.", body = SlugCheckDto),
        (status = 400, description = "Unknown entity kind.", body = ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn check_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugCheckParams>,
) -> HttpResult<Json<SlugCheckDto>> {
    state
        .services
        .slug_queries
        .check_slug(CheckSlugQuery {
            kind: params.kind,
            slug: params.slug,
            exclude_id: params.exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}

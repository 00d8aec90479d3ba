// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::CreateCategoryCommand,
    dto::{CategoryDto, CategoryPostsDto, CategoryWithCountDto},
    queries::categories::ListCategoryPostsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const CATEGORY_CREATED: &str = "카테고리가 성공적으로 생성되었습니다";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CategoryPostsParams {
    /// 1-based page number (default 1).
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size, 1..=50 (default 10).
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryWithCountDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCreatedResponse {
    pub category: CategoryDto,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories with published post counts.", body = CategoryListResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<CategoryListResponse>> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;
    Ok(Json(CategoryListResponse { categories }))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryCreatedResponse),
        (status = 400, description = "Invalid input or slug.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryCreatedResponse>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
    };

    let category = state
        .services
        .category_commands
        .create_category(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryCreatedResponse {
            category,
            message: CATEGORY_CREATED.to_owned(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories/{slug}/posts",
    params(
        ("slug" = String, Path, description = "Category slug"),
        CategoryPostsParams
    ),
    responses(
        (status = 200, description = "One page of the category's published posts.", body = CategoryPostsDto),
        (status = 404, description = "Category not found.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_category_posts(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<CategoryPostsParams>,
) -> HttpResult<Json<CategoryPostsDto>> {
    state
        .services
        .category_queries
        .list_category_posts(ListCategoryPostsQuery {
            slug,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

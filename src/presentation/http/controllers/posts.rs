// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{GeneratedSlugDto, PostDto},
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListRecentPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

const POST_CREATED: &str = "게시물이 성공적으로 생성되었습니다";
const POST_UPDATED: &str = "게시물이 성공적으로 수정되었습니다";
const POST_DELETED: &str = "게시물이 성공적으로 삭제되었습니다";

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PostListParams {
    /// Number of posts, 1..=50 (default 10).
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, alias = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    /// Category UUID; `"none"` or blank for no category.
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub cover_image_url: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateSlugRequest {
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub post: PostDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostMutationResponse {
    pub post: PostDto,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Most recent published posts.", body = PostListResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    let posts = state
        .services
        .post_queries
        .list_recent_posts(ListRecentPostsQuery {
            limit: params.limit,
        })
        .await
        .into_http()?;

    Ok(Json(PostListResponse {
        count: posts.len(),
        posts,
    }))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostMutationResponse),
        (status = 400, description = "Invalid input or slug.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostMutationResponse>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        cover_image_url: payload.cover_image_url,
        category_id: payload.category_id,
        status: payload.status,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(PostMutationResponse {
            post,
            message: POST_CREATED.to_owned(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post.", body = PostResponse),
        (status = 404, description = "No visible post with that id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<PostResponse>> {
    state
        .services
        .post_queries
        .get_post_by_id(actor.0.as_ref(), GetPostByIdQuery { id })
        .await
        .into_http()
        .map(|post| Json(PostResponse { post }))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostMutationResponse),
        (status = 400, description = "Invalid input or slug.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostMutationResponse>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        cover_image_url: payload.cover_image_url,
        category_id: payload.category_id,
        status: payload.status,
    };

    let post = state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()?;

    Ok(Json(PostMutationResponse {
        post,
        message: POST_UPDATED.to_owned(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted.", body = MessageResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: POST_DELETED.to_owned(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/posts/slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post; published reads count a view.", body = PostResponse),
        (status = 404, description = "No visible post with that slug.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostResponse>> {
    state
        .services
        .post_queries
        .get_post_by_slug(actor.0.as_ref(), GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(|post| Json(PostResponse { post }))
}

#[utoipa::path(
    post,
    path = "/api/posts/generate-slug",
    request_body = GenerateSlugRequest,
    responses(
        (status = 200, description = "Slug derived from the title.", body = GeneratedSlugDto),
        (status = 400, description = "The title yields no slug.", body = ErrorResponse)
    ),
    tag = "Slugs"
)]
pub async fn generate_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<GenerateSlugRequest>,
) -> HttpResult<Json<GeneratedSlugDto>> {
    state
        .services
        .slug_queries
        .generate_slug(&payload.title)
        .into_http()
        .map(Json)
}

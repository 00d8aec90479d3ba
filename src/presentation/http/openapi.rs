// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::generate_slug,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::list_category_posts,
        crate::presentation::http::controllers::slugs::check_slug,
        crate::presentation::http::controllers::uploads::upload_image,
        crate::presentation::http::controllers::sitemap::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::GenerateSlugRequest,
            crate::presentation::http::controllers::posts::PostListResponse,
            crate::presentation::http::controllers::posts::PostResponse,
            crate::presentation::http::controllers::posts::PostMutationResponse,
            crate::presentation::http::controllers::posts::MessageResponse,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::CategoryListResponse,
            crate::presentation::http::controllers::categories::CategoryCreatedResponse,
            crate::application::dto::PostDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::CategoryWithCountDto,
            crate::application::dto::CategoryPostsDto,
            crate::application::dto::PaginationDto,
            crate::application::dto::GeneratedSlugDto,
            crate::application::dto::SlugCheckDto,
            crate::application::dto::UploadedImageDto
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Slugs", description = "Slug generation and availability"),
        (name = "Uploads", description = "Image uploads"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blog API",
        description = "Blog backend with slug-addressed posts and categories",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs`; the UI also serves the document at `/openapi.json`.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

use axum::{http::Uri, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{college, health, user},
    error::AppError,
    state::AppState,
};

/// Registers the bearer token scheme referenced by the college routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "collegeboard API",
        description = "Users, colleges and their courses."
    ),
    tags(
        (name = "user", description = "User registration and removal"),
        (name = "college", description = "Colleges and courses, bearer token required"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

/// Routes annotated with `#[utoipa::path]`, grouped by path.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user, user::delete_user))
        .routes(routes!(college::get_colleges, college::create_college))
        .routes(routes!(
            college::get_colleges_with_courses,
            college::add_course
        ))
        .routes(routes!(health::health))
}

/// Answers unknown paths with the standard error body.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}

/// Builds the complete application: API routes, OpenAPI document, Swagger UI and layers.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and Swagger UI at
/// `/swagger-ui`. Any other path gets a 404 error body.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

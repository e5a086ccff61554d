//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use roster_config::ServerConfig;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let users = user_controller::router().with_state(state);

    let mut router = Router::new()
        .merge(health_controller::router())
        .nest("/users", users)
        .route(OPENAPI_PATH, get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    if server_config.cors_enabled {
        router = router.layer(create_cors_layer(&server_config.cors_origins));
    }

    info!("Router created with /users endpoints and OpenAPI at {}", OPENAPI_PATH);
    router
}

/// Creates a CORS layer for the configured origins.
///
/// A `*` entry allows any origin. Origins that are not valid header values
/// are skipped with a warning.
fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

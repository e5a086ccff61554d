//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use crate::responses::ErrorBody;
use roster_core::User;
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Read-mostly directory of users",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::add_user,
        crate::controllers::user_controller::remove_user,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(schemas(User, ErrorBody, HealthResponse)),
    tags(
        (name = "users", description = "User directory endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

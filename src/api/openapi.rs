//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, labels};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kohalabel API",
        version = "0.1.0",
        description = "Barcode and spine label printing over a Koha catalog",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Labels
        labels::generate_labels,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::label::LabelQuery,
            crate::models::label::LabelRecord,
            crate::models::label::LabelResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "labels", description = "Label printing")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

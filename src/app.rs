use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{models::HealthStatus, routes};

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";

#[derive(OpenApi)]
#[openapi(
    info(title = "Qiskit API", version = "0.1.0"),
    paths(routes::health::health_check),
    components(schemas(HealthStatus)),
    tags(
        (name = "System", description = "System health and status endpoints")
    )
)]
pub struct ApiDoc;

/// Builds the full route table served by the binary.
pub fn router() -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
        .route("/", get(routes::health::health_check))
}

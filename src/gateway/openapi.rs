//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::contact::ContactSubmission;
use crate::gateway::types::{ErrorBody, HealthBody, MessageBody};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Gateway API",
        version = "1.0.0",
        description = "Contact-form backend: stores each submission and emails a notification.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::contact::create_contact,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            ContactSubmission,
            MessageBody,
            ErrorBody,
            HealthBody,
        )
    ),
    tags(
        (name = "Contact", description = "Contact form submission"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

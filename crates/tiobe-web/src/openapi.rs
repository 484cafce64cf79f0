//! OpenAPI document for the JSON API and the Swagger UI that renders it.

use tiobe_common::{Language, LanguageDetail};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::languages::list_languages,
        crate::handlers::languages::get_language
    ),
    components(
        schemas(Language, LanguageDetail)
    ),
    tags(
        (name = "rust-tiobe", description = "Rust TIOBE Index API")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, also serving the document at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}

use axum::Json;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use crate::dto::{OwnerDto, PetDto, PetFieldsDto, PetTypeDto};
use crate::error::{ErrorCode, ErrorDetail, ErrorResponse};
use crate::handlers::health::{HealthStatus, StoreHealth};
use crate::validation::{Constraint, FieldViolation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Clinic API",
        version = "0.1.0",
        description = "REST endpoints for owners, pets and pet types"
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::pets::list_pets,
        crate::handlers::pets::get_pet,
        crate::handlers::pets::update_pet,
        crate::handlers::pets::delete_pet,
        crate::handlers::owners::get_owner,
        crate::handlers::owners::add_pet_to_owner,
        crate::handlers::owners::get_owners_pet,
        crate::handlers::owners::update_owners_pet,
        crate::handlers::pet_types::list_pet_types,
    ),
    components(schemas(
        PetDto,
        PetFieldsDto,
        PetTypeDto,
        OwnerDto,
        FieldViolation,
        Constraint,
        ErrorCode,
        ErrorDetail,
        ErrorResponse,
        HealthStatus,
        StoreHealth,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "pets", description = "Pet resources"),
        (name = "owners", description = "Owners and their pets"),
        (name = "pettypes", description = "Pet type reference data"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token carrying OWNER_ADMIN or VET_ADMIN roles"))
                    .build(),
            ),
        )
    }
}

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

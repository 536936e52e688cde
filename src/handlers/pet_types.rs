use axum::{Json, extract::State};

use crate::AppState;
use crate::dto::PetTypeDto;
use crate::error::Result;
use crate::mapper;

/// List the pet types the clinic accepts
#[utoipa::path(
    get,
    path = "/api/pettypes",
    tag = "pettypes",
    responses(
        (status = 200, description = "All pet types", body = Vec<PetTypeDto>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_pet_types(State(state): State<AppState>) -> Result<Json<Vec<PetTypeDto>>> {
    let pet_types = state.clinic.find_all_pet_types().await?;
    Ok(Json(pet_types.iter().map(mapper::to_pet_type_dto).collect()))
}

//! Pet resource endpoints under `/api/pets`.

use axum::{Json, extract::State};
use tracing::info;

use crate::AppState;
use crate::dto::PetDto;
use crate::error::{ApiError, Result};
use crate::handlers::extractors::{ApiPath, ValidJson};
use crate::handlers::response::NoContent;
use crate::mapper;

/// List every pet
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = "pets",
    responses(
        (status = 200, description = "All pets", body = Vec<PetDto>),
        (status = 404, description = "No pets registered", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<PetDto>>> {
    let pets = state.clinic.find_all_pets().await?;
    if pets.is_empty() {
        return Err(ApiError::not_found("Pets"));
    }
    Ok(Json(mapper::to_pet_dtos(&pets)))
}

/// Get a pet by id
#[utoipa::path(
    get,
    path = "/api/pets/{petId}",
    tag = "pets",
    params(("petId" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 404, description = "Pet not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_pet(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
) -> Result<Json<PetDto>> {
    let pet = state
        .clinic
        .find_pet_by_id(pet_id)
        .await?
        .ok_or_else(|| ApiError::pet_not_found(pet_id))?;
    Ok(Json(mapper::to_pet_dto(&pet)))
}

/// Replace a pet's attributes. A missing or null `weight` clears it.
#[utoipa::path(
    put,
    path = "/api/pets/{petId}",
    tag = "pets",
    params(("petId" = i32, Path, description = "Pet id")),
    request_body = PetDto,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid pet", body = crate::error::ErrorResponse),
        (status = 404, description = "Pet not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_pet(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
    ValidJson(body): ValidJson<PetDto>,
) -> Result<NoContent> {
    let current = state
        .clinic
        .find_pet_by_id(pet_id)
        .await?
        .ok_or_else(|| ApiError::pet_not_found(pet_id))?;

    let saved = state
        .clinic
        .save_pet(mapper::apply_pet_dto(current, &body))
        .await?;
    info!(pet_id, weight = ?saved.weight, "Pet updated");
    Ok(NoContent)
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/api/pets/{petId}",
    tag = "pets",
    params(("petId" = i32, Path, description = "Pet id")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
) -> Result<NoContent> {
    if state.clinic.find_pet_by_id(pet_id).await?.is_none() {
        return Err(ApiError::pet_not_found(pet_id));
    }
    state.clinic.delete_pet(pet_id).await?;
    info!(pet_id, "Pet deleted");
    Ok(NoContent)
}

//! Owner endpoints and the pet operations scoped to one owner.

use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::AppState;
use crate::dto::{OwnerDto, PetDto, PetFieldsDto};
use crate::error::{ApiError, Result};
use crate::handlers::extractors::{ApiPath, ValidJson};
use crate::handlers::response::{Created, NoContent};
use crate::mapper;
use crate::models::{Owner, Pet};

async fn load_owner(state: &AppState, owner_id: i32) -> Result<Owner> {
    state
        .clinic
        .find_owner_by_id(owner_id)
        .await?
        .ok_or_else(|| ApiError::owner_not_found(owner_id))
}

/// The pet, provided it exists and belongs to the owner
async fn load_owners_pet(state: &AppState, owner_id: i32, pet_id: i32) -> Result<Pet> {
    load_owner(state, owner_id).await?;
    state
        .clinic
        .find_pet_by_id(pet_id)
        .await?
        .filter(|pet| pet.belongs_to(owner_id))
        .ok_or_else(|| ApiError::pet_not_found(pet_id))
}

/// Get an owner with their pets
#[utoipa::path(
    get,
    path = "/api/owners/{ownerId}",
    tag = "owners",
    params(("ownerId" = i32, Path, description = "Owner id")),
    responses(
        (status = 200, description = "The owner", body = OwnerDto),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_owner(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
) -> Result<Json<OwnerDto>> {
    let owner = load_owner(&state, owner_id).await?;
    let pets = state.clinic.find_pets_by_owner(owner_id).await?;
    debug!(owner = %owner.full_name(), pets = pets.len(), "Owner loaded");
    Ok(Json(mapper::to_owner_dto(&owner, &pets)))
}

/// Register a new pet for an owner
#[utoipa::path(
    post,
    path = "/api/owners/{ownerId}/pets",
    tag = "owners",
    params(("ownerId" = i32, Path, description = "Owner id")),
    request_body = PetFieldsDto,
    responses(
        (status = 201, description = "Pet created", body = PetDto,
            headers(("Location" = String, description = "URI of the new pet"))),
        (status = 400, description = "Invalid pet", body = crate::error::ErrorResponse),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_pet_to_owner(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    ValidJson(fields): ValidJson<PetFieldsDto>,
) -> Result<Created<PetDto>> {
    load_owner(&state, owner_id).await?;

    let pet = mapper::fields_to_pet(&fields).with_owner(owner_id);
    let saved = state.clinic.save_pet(pet).await?;
    let pet_id = saved
        .id
        .ok_or_else(|| ApiError::Internal("Saved pet has no id".to_string()))?;

    info!(owner_id, pet_id, weight = ?saved.weight, "Pet added to owner");
    Ok(Created::at(
        format!("/api/pets/{}", pet_id),
        mapper::to_pet_dto(&saved),
    ))
}

/// Get one of an owner's pets
#[utoipa::path(
    get,
    path = "/api/owners/{ownerId}/pets/{petId}",
    tag = "owners",
    params(
        ("ownerId" = i32, Path, description = "Owner id"),
        ("petId" = i32, Path, description = "Pet id")
    ),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 404, description = "Owner or pet not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_owners_pet(
    State(state): State<AppState>,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
) -> Result<Json<PetDto>> {
    let pet = load_owners_pet(&state, owner_id, pet_id).await?;
    Ok(Json(mapper::to_pet_dto(&pet)))
}

/// Update one of an owner's pets. A missing or null `weight` clears it.
#[utoipa::path(
    put,
    path = "/api/owners/{ownerId}/pets/{petId}",
    tag = "owners",
    params(
        ("ownerId" = i32, Path, description = "Owner id"),
        ("petId" = i32, Path, description = "Pet id")
    ),
    request_body = PetFieldsDto,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid pet", body = crate::error::ErrorResponse),
        (status = 404, description = "Owner or pet not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_owners_pet(
    State(state): State<AppState>,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
    ValidJson(fields): ValidJson<PetFieldsDto>,
) -> Result<NoContent> {
    let current = load_owners_pet(&state, owner_id, pet_id).await?;
    let saved = state
        .clinic
        .save_pet(mapper::apply_fields(current, &fields))
        .await?;

    info!(owner_id, pet_id, weight = ?saved.weight, "Owner's pet updated");
    Ok(NoContent)
}

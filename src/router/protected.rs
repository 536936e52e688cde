//! Protected routes: bearer authentication plus a per-resource permission check.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};

use crate::app_state::AppState;
use crate::auth::auth_middleware;
use crate::handlers::{owners, pet_types, pets, require_resource_access};

fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/api/pets", get(pets::list_pets))
        .route(
            "/api/pets/{petId}",
            get(pets::get_pet)
                .put(pets::update_pet)
                .delete(pets::delete_pet),
        )
        .route_layer(from_fn_with_state("pets", require_resource_access))
}

fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/api/owners/{ownerId}", get(owners::get_owner))
        .route(
            "/api/owners/{ownerId}/pets",
            axum::routing::post(owners::add_pet_to_owner),
        )
        .route(
            "/api/owners/{ownerId}/pets/{petId}",
            get(owners::get_owners_pet).put(owners::update_owners_pet),
        )
        .route_layer(from_fn_with_state("owners", require_resource_access))
}

fn pet_type_routes() -> Router<AppState> {
    Router::new()
        .route("/api/pettypes", get(pet_types::list_pet_types))
        .route_layer(from_fn_with_state("pettypes", require_resource_access))
}

/// Build routes that require authentication.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .merge(pet_routes())
        .merge(owner_routes())
        .merge(pet_type_routes())
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}

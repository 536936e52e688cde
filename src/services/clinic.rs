//! Clinic service contract.
//!
//! Handlers depend on [`ClinicService`] only. The shipped implementation is
//! [`super::InMemoryClinicService`]; tests substitute a `mockall` mock.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Owner, Pet, PetType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A pet refers to an owner or pet type the clinic does not know
    #[error("unknown {entity} {id}")]
    UnknownReference { entity: &'static str, id: i32 },

    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn pet_not_found(id: i32) -> Self {
        Self::NotFound { entity: "pet", id }
    }

    pub fn owner_not_found(id: i32) -> Self {
        Self::NotFound { entity: "owner", id }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicService: Send + Sync {
    async fn find_all_pets(&self) -> Result<Vec<Pet>, ServiceError>;

    async fn find_pet_by_id(&self, id: i32) -> Result<Option<Pet>, ServiceError>;

    /// Insert a new pet (`id == None`) or replace an existing one.
    /// Returns the stored pet with its id assigned.
    async fn save_pet(&self, pet: Pet) -> Result<Pet, ServiceError>;

    async fn delete_pet(&self, id: i32) -> Result<(), ServiceError>;

    async fn find_owner_by_id(&self, id: i32) -> Result<Option<Owner>, ServiceError>;

    /// Pets of one owner ordered by name
    async fn find_pets_by_owner(&self, owner_id: i32) -> Result<Vec<Pet>, ServiceError>;

    async fn find_all_pet_types(&self) -> Result<Vec<PetType>, ServiceError>;

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, ServiceError>;
}

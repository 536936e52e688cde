use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::clinic::{ClinicService, ServiceError};
use crate::models::{Owner, Pet, PetType};

#[derive(Debug, Default)]
struct Store {
    owners: BTreeMap<i32, Owner>,
    pet_types: BTreeMap<i32, PetType>,
    pets: BTreeMap<i32, Pet>,
    next_pet_id: i32,
}

/// Clinic service keeping everything in process memory.
///
/// Pets reference owners and pet types by id; saving a pet with an unknown
/// reference fails with [`ServiceError::UnknownReference`]. The stored pet
/// type is always the canonical one looked up by id.
#[derive(Debug, Default)]
pub struct InMemoryClinicService {
    store: RwLock<Store>,
}

impl InMemoryClinicService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service from existing records. Pets without an id are
    /// skipped; new ids continue after the highest one given.
    pub fn from_records(
        owners: impl IntoIterator<Item = Owner>,
        pet_types: impl IntoIterator<Item = PetType>,
        pets: impl IntoIterator<Item = Pet>,
    ) -> Self {
        let owners: BTreeMap<i32, Owner> = owners.into_iter().map(|o| (o.id, o)).collect();
        let pet_types: BTreeMap<i32, PetType> =
            pet_types.into_iter().map(|t| (t.id, t)).collect();
        let pets: BTreeMap<i32, Pet> = pets
            .into_iter()
            .filter_map(|p| p.id.map(|id| (id, p)))
            .collect();
        let next_pet_id = pets.keys().next_back().map_or(1, |id| id + 1);

        info!(
            owners = owners.len(),
            pet_types = pet_types.len(),
            pets = pets.len(),
            "Clinic store initialized"
        );

        Self {
            store: RwLock::new(Store {
                owners,
                pet_types,
                pets,
                next_pet_id,
            }),
        }
    }

    /// Service preloaded with the sample clinic
    pub fn with_sample_data() -> Self {
        Self::from_records(
            super::sample_data::owners(),
            super::sample_data::pet_types(),
            super::sample_data::pets(),
        )
    }
}

#[async_trait]
impl ClinicService for InMemoryClinicService {
    async fn find_all_pets(&self) -> Result<Vec<Pet>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.pets.values().cloned().collect())
    }

    async fn find_pet_by_id(&self, id: i32) -> Result<Option<Pet>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.pets.get(&id).cloned())
    }

    async fn save_pet(&self, mut pet: Pet) -> Result<Pet, ServiceError> {
        let mut store = self.store.write().await;

        let pet_type = store
            .pet_types
            .get(&pet.pet_type.id)
            .cloned()
            .ok_or(ServiceError::UnknownReference {
                entity: "pet type",
                id: pet.pet_type.id,
            })?;
        pet.pet_type = pet_type;

        if let Some(owner_id) = pet.owner_id {
            if !store.owners.contains_key(&owner_id) {
                return Err(ServiceError::UnknownReference {
                    entity: "owner",
                    id: owner_id,
                });
            }
        }

        let id = match pet.id {
            Some(id) if store.pets.contains_key(&id) => id,
            Some(id) => return Err(ServiceError::pet_not_found(id)),
            None => {
                let id = store.next_pet_id;
                store.next_pet_id += 1;
                id
            }
        };
        pet.id = Some(id);
        store.pets.insert(id, pet.clone());

        debug!(pet_id = id, owner_id = ?pet.owner_id, weight = ?pet.weight, "Pet saved");
        Ok(pet)
    }

    async fn delete_pet(&self, id: i32) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        store
            .pets
            .remove(&id)
            .map(|_| debug!(pet_id = id, "Pet deleted"))
            .ok_or(ServiceError::pet_not_found(id))
    }

    async fn find_owner_by_id(&self, id: i32) -> Result<Option<Owner>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.owners.get(&id).cloned())
    }

    async fn find_pets_by_owner(&self, owner_id: i32) -> Result<Vec<Pet>, ServiceError> {
        let store = self.store.read().await;
        let mut pets: Vec<Pet> = store
            .pets
            .values()
            .filter(|p| p.belongs_to(owner_id))
            .cloned()
            .collect();
        pets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pets)
    }

    async fn find_all_pet_types(&self) -> Result<Vec<PetType>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.pet_types.values().cloned().collect())
    }

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.pet_types.get(&id).cloned())
    }
}

use super::pet::to_pet_dtos;
use crate::dto::OwnerDto;
use crate::models::{Owner, Pet};

pub fn to_owner_dto(owner: &Owner, pets: &[Pet]) -> OwnerDto {
    OwnerDto {
        id: owner.id,
        first_name: owner.first_name.clone(),
        last_name: owner.last_name.clone(),
        address: owner.address.clone(),
        city: owner.city.clone(),
        telephone: owner.telephone.clone(),
        pets: to_pet_dtos(pets),
    }
}

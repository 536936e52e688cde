use super::pet_type::{to_pet_type, to_pet_type_dto};
use crate::dto::{PetDto, PetFieldsDto};
use crate::models::Pet;

pub fn to_pet_dto(pet: &Pet) -> PetDto {
    PetDto {
        id: pet.id,
        name: pet.name.clone(),
        birth_date: pet.birth_date,
        pet_type: to_pet_type_dto(&pet.pet_type),
        owner_id: pet.owner_id,
        weight: pet.weight,
    }
}

pub fn to_pet_dtos(pets: &[Pet]) -> Vec<PetDto> {
    pets.iter().map(to_pet_dto).collect()
}

pub fn to_pet(dto: &PetDto) -> Pet {
    Pet {
        id: dto.id,
        name: dto.name.clone(),
        birth_date: dto.birth_date,
        pet_type: to_pet_type(&dto.pet_type),
        owner_id: dto.owner_id,
        weight: dto.weight,
    }
}

/// New, unsaved pet built from the write-side fields
pub fn fields_to_pet(fields: &PetFieldsDto) -> Pet {
    Pet {
        id: None,
        name: fields.name.clone(),
        birth_date: fields.birth_date,
        pet_type: to_pet_type(&fields.pet_type),
        owner_id: None,
        weight: fields.weight,
    }
}

/// Replace the mutable attributes of `current`. Identity and owner are kept;
/// an absent weight clears the stored one.
pub fn apply_fields(current: Pet, fields: &PetFieldsDto) -> Pet {
    Pet {
        name: fields.name.clone(),
        birth_date: fields.birth_date,
        pet_type: to_pet_type(&fields.pet_type),
        weight: fields.weight,
        ..current
    }
}

/// Same as [`apply_fields`] for a full pet body. The body's `id` and
/// `ownerId` are ignored.
pub fn apply_pet_dto(current: Pet, dto: &PetDto) -> Pet {
    Pet {
        name: dto.name.clone(),
        birth_date: dto.birth_date,
        pet_type: to_pet_type(&dto.pet_type),
        weight: dto.weight,
        ..current
    }
}

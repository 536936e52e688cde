use crate::dto::PetTypeDto;
use crate::models::PetType;

pub fn to_pet_type_dto(pet_type: &PetType) -> PetTypeDto {
    PetTypeDto {
        id: pet_type.id,
        name: pet_type.name.clone(),
    }
}

pub fn to_pet_type(dto: &PetTypeDto) -> PetType {
    PetType {
        id: dto.id,
        name: dto.name.clone(),
    }
}

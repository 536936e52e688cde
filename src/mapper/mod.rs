//! Pure conversions between clinic entities and transfer objects.

pub mod owner;
pub mod pet;
pub mod pet_type;

pub use owner::to_owner_dto;
pub use pet::{apply_fields, apply_pet_dto, fields_to_pet, to_pet, to_pet_dto, to_pet_dtos};
pub use pet_type::{to_pet_type, to_pet_type_dto};

//! JSON transfer objects.
//!
//! Read endpoints return full resources (`PetDto`, `OwnerDto`); the
//! owner-scoped write endpoints accept the field subset `PetFieldsDto`.

pub mod owner;
pub mod pet;
pub mod pet_type;

pub use owner::OwnerDto;
pub use pet::{PetDto, PetFieldsDto, ValidateFields};
pub use pet_type::PetTypeDto;

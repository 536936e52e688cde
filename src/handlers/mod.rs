pub mod authorization;
pub mod extractors;
pub mod health;
pub mod owners;
pub mod pet_types;
pub mod pets;
pub mod response;

pub use authorization::require_resource_access;
pub use extractors::{ApiPath, ValidJson};
pub use response::{Created, NoContent};

// Domain entities held by the clinic service

pub mod owner;
pub mod pet;

pub use owner::Owner;
pub use pet::{Pet, PetType};

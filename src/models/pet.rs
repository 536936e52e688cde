use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of animal (cat, dog, ...). Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A pet registered at the clinic.
///
/// `id` is `None` until the clinic service has stored the pet. `weight` is
/// optional and, when present, lies within the range enforced by
/// [`crate::validation::validate_weight`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    pub owner_id: Option<i32>,
    pub weight: Option<Decimal>,
}

impl Pet {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            pet_type,
            owner_id: None,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: Option<Decimal>) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Check if the pet has not been stored yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn belongs_to(&self, owner_id: i32) -> bool {
        self.owner_id == Some(owner_id)
    }
}

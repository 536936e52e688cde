use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PetDto;

/// Owner resource with the pets registered to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "George")]
    pub first_name: String,
    #[schema(example = "Franklin")]
    pub last_name: String,
    #[schema(example = "110 W. Liberty St.")]
    pub address: String,
    #[schema(example = "Madison")]
    pub city: String,
    #[schema(example = "6085551023")]
    pub telephone: String,
    #[serde(default)]
    pub pets: Vec<PetDto>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::pet::MAX_TYPE_NAME_LENGTH;

/// Pet type reference as it appears inside pet payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PetTypeDto {
    #[schema(example = 2)]
    pub id: i32,

    #[validate(length(min = 1, max = MAX_TYPE_NAME_LENGTH))]
    #[schema(example = "dog")]
    pub name: String,
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::PetTypeDto;
use crate::constants::pet::MAX_NAME_LENGTH;
use crate::validation::{validate_optional_weight, Violations};

/// Full pet resource returned by read endpoints and accepted by
/// `PUT /api/pets/{id}`.
///
/// Unset optional fields are omitted from JSON rather than written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    /// Assigned by the clinic; ignored on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    #[schema(example = "Leo")]
    pub name: String,

    #[schema(value_type = String, format = Date, example = "2010-09-07")]
    pub birth_date: NaiveDate,

    #[serde(rename = "type")]
    #[validate(nested)]
    pub pet_type: PetTypeDto,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub owner_id: Option<i32>,

    /// Weight in kilograms, `0.00..=999.99`, written with its stored scale
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    #[schema(value_type = Option<f64>, example = 15.75)]
    pub weight: Option<Decimal>,
}

/// Creatable/updatable pet attributes used by the owner-scoped endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetFieldsDto {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    #[schema(example = "Leo")]
    pub name: String,

    #[schema(value_type = String, format = Date, example = "2010-09-07")]
    pub birth_date: NaiveDate,

    #[serde(rename = "type")]
    #[validate(nested)]
    pub pet_type: PetTypeDto,

    /// Weight in kilograms, `0.00..=999.99`, written with its stored scale
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    #[schema(value_type = Option<f64>, example = 22.5)]
    pub weight: Option<Decimal>,
}

/// Run derived field checks and the explicit weight rules together so a
/// single response lists every violation.
pub trait ValidateFields {
    fn validate_fields(&self) -> Result<(), Violations>;
}

fn validate_pet_body<T: Validate>(body: &T, weight: Option<&Decimal>) -> Result<(), Violations> {
    let mut violations = match body.validate() {
        Ok(()) => Violations::new(),
        Err(errors) => Violations::from(errors),
    };
    if let Err(weight_violations) = validate_optional_weight(weight) {
        violations.extend(weight_violations);
    }
    violations.into_result()
}

impl ValidateFields for PetDto {
    fn validate_fields(&self) -> Result<(), Violations> {
        validate_pet_body(self, self.weight.as_ref())
    }
}

impl ValidateFields for PetFieldsDto {
    fn validate_fields(&self) -> Result<(), Violations> {
        validate_pet_body(self, self.weight.as_ref())
    }
}

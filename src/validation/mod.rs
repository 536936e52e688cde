//! Field validation for write-side transfer objects.
//!
//! String fields are checked through `validator` derives on the DTOs; numeric
//! ranges that need decimal precision are checked by explicit functions such
//! as [`validate_weight`]. Both produce [`FieldViolation`]s so the error
//! translator reports them uniformly.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

pub mod weight;

pub use weight::{validate_optional_weight, validate_weight};

/// The rule a field value broke, with its bound.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum Constraint {
    Length {
        min: Option<u64>,
        max: Option<u64>,
    },
    DecimalMin {
        #[schema(value_type = f64)]
        value: Decimal,
        inclusive: bool,
    },
    DecimalMax {
        #[schema(value_type = f64)]
        value: Decimal,
        inclusive: bool,
    },
    Digits { integer: u32, fraction: u32 },
    /// A rule reported by a derive that has no dedicated variant
    Other { code: String },
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Length { min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "length must be between {} and {}", min, max),
                (Some(min), None) => write!(f, "length must be at least {}", min),
                (None, Some(max)) => write!(f, "length must be at most {}", max),
                (None, None) => write!(f, "invalid length"),
            },
            Constraint::DecimalMin { value, inclusive } => {
                let op = if *inclusive { "greater than or equal to" } else { "greater than" };
                write!(f, "must be {} {}", op, value)
            }
            Constraint::DecimalMax { value, inclusive } => {
                let op = if *inclusive { "less than or equal to" } else { "less than" };
                write!(f, "must be {} {}", op, value)
            }
            Constraint::Digits { integer, fraction } => write!(
                f,
                "numeric value out of bounds (<{} digits>.<{} digits> expected)",
                integer, fraction
            ),
            Constraint::Other { code } => write!(f, "failed '{}' check", code),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        let message = constraint.to_string();
        Self {
            field: field.into(),
            constraint,
            message,
            rejected_value: None,
        }
    }

    pub fn rejecting(mut self, value: impl ToString) -> Self {
        self.rejected_value = Some(value.to_string());
        self
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collected violations for one request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn extend(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), Violations> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldViolation> for Violations {
    fn from(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl From<ValidationErrors> for Violations {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Violations::new();
        collect_validator_errors(&errors, None, &mut violations);
        // HashMap iteration order is unstable; keep reports deterministic
        violations.0.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }
}

fn collect_validator_errors(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Violations) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let constraint = constraint_from_code(&error.code, &error.params);
                    let mut violation = FieldViolation::new(path.clone(), constraint);
                    if let Some(message) = &error.message {
                        violation.message = message.to_string();
                    }
                    if let Some(value) = error.params.get("value") {
                        violation.rejected_value = Some(json_scalar(value));
                    }
                    out.push(violation);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validator_errors(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let indexed = format!("{}[{}]", path, index);
                    collect_validator_errors(nested, Some(&indexed), out);
                }
            }
        }
    }
}

fn constraint_from_code(
    code: &Cow<'static, str>,
    params: &std::collections::HashMap<Cow<'static, str>, serde_json::Value>,
) -> Constraint {
    match code.as_ref() {
        "length" => Constraint::Length {
            min: params.get("min").and_then(serde_json::Value::as_u64),
            max: params.get("max").and_then(serde_json::Value::as_u64),
        },
        other => Constraint::Other {
            code: other.to_string(),
        },
    }
}

fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

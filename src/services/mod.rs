// Business logic services
// Clinic lookup and persistence behind a trait so handlers can be tested with mocks.

pub mod clinic;
pub mod in_memory;
pub mod sample_data;

pub use clinic::{ClinicService, ServiceError};
pub use in_memory::InMemoryClinicService;

#[cfg(test)]
pub use clinic::MockClinicService;

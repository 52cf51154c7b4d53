//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::EmployeeId;

/// Domain errors represent chart invariant violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate employee id: {0}")]
    DuplicateId(EmployeeId),
}

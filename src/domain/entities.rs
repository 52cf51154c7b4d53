//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

/// Unique employee identifier, stable for the lifetime of a chart.
pub type EmployeeId = u32;

/// Employee with their direct reports, as nested chart data.
///
/// This is the exchange form: chart files deserialize into it, and the
/// engine hands out independent copies of it. All mutation happens on
/// the arena representation, never on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Ordered direct reports, exclusively owned by this employee
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subordinates: Vec<Employee>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subordinates: Vec::new(),
        }
    }
}

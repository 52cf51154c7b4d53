//! Domain layer: chart entities and the relocation engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading).

pub mod arena;
pub mod engine;
pub mod entities;
pub mod error;
pub mod history;
pub mod sample;

pub use arena::{Located, NodeData, OrgArena, OrgNode};
pub use engine::{OrgApp, Outcome};
pub use entities::{Employee, EmployeeId};
pub use error::DomainError;
pub use history::{EntryState, History, HistoryEntry};
pub use sample::sample_chart;

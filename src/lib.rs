//! orgmv: organizational chart manager with undoable employee relocation.
//!
//! The chart is a rooted tree of employees held in an arena. Relocating
//! an employee promotes their reports to the former supervisor, clears
//! the employee's own report list, and reattaches the employee under
//! the new supervisor; each relocation records a history entry, and the
//! history supports strictly linear undo/redo.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    sample_chart, Employee, EmployeeId, EntryState, HistoryEntry, OrgApp, Outcome,
};

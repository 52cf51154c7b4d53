//! Relocation engine: move an employee, undo, redo.

use std::fmt;

use tracing::{debug, instrument};

use crate::domain::arena::OrgArena;
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::error::DomainError;
use crate::domain::history::{EntryState, History, HistoryEntry};

/// Result of a single engine operation.
///
/// Unknown identifiers make an operation a silent no-op rather than an
/// error; the variants let callers tell a no-op apart from success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The chart was changed and the history updated.
    Applied,
    /// An identifier did not resolve; nothing was changed.
    NotFound(EmployeeId),
    /// The history holds no entry eligible for undo.
    NothingToUndo,
    /// The newest history entry is not undone, or the history is empty.
    NothingToRedo,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::NotFound(id) => write!(f, "no employee with id {id}"),
            Outcome::NothingToUndo => write!(f, "nothing to undo"),
            Outcome::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

/// Organization chart with relocation and a linear undo/redo history.
///
/// Owns an independent copy of the chart it was constructed from;
/// mutating the caller's original afterwards has no effect here.
#[derive(Debug)]
pub struct OrgApp {
    tree: OrgArena,
    history: History,
}

impl OrgApp {
    pub fn new(chart: &Employee) -> Result<Self, DomainError> {
        Ok(Self {
            tree: OrgArena::from_chart(chart)?,
            history: History::new(),
        })
    }

    /// Current chart as an independent nested copy.
    pub fn chart(&self) -> Employee {
        self.tree
            .to_chart()
            .expect("arena built from a chart always has a root")
    }

    /// Recorded relocations, oldest first. Entries are `Clone` for
    /// callers that want an independent snapshot.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Relocate `employee` to report to `supervisor`.
    ///
    /// The employee's own reports are promoted to the former
    /// supervisor, so the employee arrives with none. One history entry
    /// is recorded per successful call. The root can be neither moved
    /// nor chosen as the target; unknown ids leave chart and history
    /// untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(&mut self, employee: EmployeeId, supervisor: EmployeeId) -> Outcome {
        let Some(found) = self.tree.locate(employee) else {
            return Outcome::NotFound(employee);
        };
        let Some(target) = self.tree.locate(supervisor) else {
            return Outcome::NotFound(supervisor);
        };

        self.history.push(HistoryEntry {
            employee,
            supervisor: found.parent_id,
            subordinates: self.tree.children_ids(found.node),
            state: EntryState::Applied,
        });
        self.tree.relocate_node(found.node, found.parent, target.node);
        debug!("moved {} under {}", employee, supervisor);
        Outcome::Applied
    }

    /// Reverse the most recent relocation that has not been undone.
    ///
    /// Restores the exact pre-move shape: the promoted reports return
    /// from the old supervisor's tail to the employee, and the employee
    /// leaves the tail of its current supervisor's list. The entry is
    /// rewritten in place so `redo` can replay it forward.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Outcome {
        let Some(pos) = self.history.undo_target() else {
            return Outcome::NothingToUndo;
        };
        let (employee, supervisor, snapshot) = match self.history.entry(pos) {
            Some(entry) => (
                entry.employee,
                entry.supervisor,
                entry.subordinates.clone(),
            ),
            None => return Outcome::NothingToUndo,
        };

        let Some(found) = self.tree.locate(employee) else {
            return Outcome::NotFound(employee);
        };
        let Some(target) = self.tree.locate(supervisor) else {
            return Outcome::NotFound(supervisor);
        };
        // Resolve the snapshot before the first mutation so a failed
        // lookup leaves the chart untouched
        let mut restored = Vec::with_capacity(snapshot.len());
        for id in &snapshot {
            match self.tree.locate(*id) {
                Some(child) => restored.push(child.node),
                None => return Outcome::NotFound(*id),
            }
        }

        self.tree.truncate_children(target.node, snapshot.len());
        self.tree.set_children(found.node, restored);
        self.tree.pop_child(found.parent);
        self.tree.attach(target.node, found.node);

        if let Some(entry) = self.history.entry_mut(pos) {
            entry.subordinates.clear();
            entry.supervisor = found.parent_id;
            entry.state = EntryState::Reversed;
        }
        debug!("undid relocation of {}", employee);
        Outcome::Applied
    }

    /// Reapply the most recently undone relocation, but only if it is
    /// the newest history entry. Reversed entries buried under newer
    /// moves stay unreachable.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) -> Outcome {
        let Some(pos) = self.history.redo_target() else {
            return Outcome::NothingToRedo;
        };
        let (employee, supervisor) = match self.history.entry(pos) {
            Some(entry) => (entry.employee, entry.supervisor),
            None => return Outcome::NothingToRedo,
        };

        let Some(found) = self.tree.locate(employee) else {
            return Outcome::NotFound(employee);
        };
        let Some(target) = self.tree.locate(supervisor) else {
            return Outcome::NotFound(supervisor);
        };

        let snapshot = self.tree.children_ids(found.node);
        if let Some(entry) = self.history.entry_mut(pos) {
            entry.supervisor = found.parent_id;
            entry.subordinates = snapshot;
            entry.state = EntryState::Applied;
        }
        self.tree.relocate_node(found.node, found.parent, target.node);
        debug!("redid relocation of {}", employee);
        Outcome::Applied
    }
}

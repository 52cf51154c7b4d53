//! Relocation history: a linear undo/redo log.
//!
//! Entries are appended by `move`, mutated in place by `undo`/`redo`,
//! and never deleted. Undoing flips an entry to `Reversed` and rewrites
//! its fields so the same entry can replay the move in the opposite
//! direction. A fresh move after an undo appends a new entry without
//! touching older reversed ones; those become permanently unreachable
//! for redo, which only ever considers the newest entry.

use std::fmt;

use crate::domain::entities::EmployeeId;

/// Direction an entry currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// The move is in effect; the entry can be undone.
    Applied,
    /// The move has been reversed; the entry can be redone if newest.
    Reversed,
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryState::Applied => write!(f, "applied"),
            EntryState::Reversed => write!(f, "undone"),
        }
    }
}

/// Record of one relocation, carrying enough to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The relocated employee
    pub employee: EmployeeId,
    /// Where to send the employee on the next undo/redo of this entry.
    /// Not a fixed "original supervisor": undo and redo rewrite it.
    pub supervisor: EmployeeId,
    /// The employee's direct reports when the entry was last written
    pub subordinates: Vec<EmployeeId>,
    pub state: EntryState,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} -> {} [{}]",
            self.employee, self.supervisor, self.state
        )
    }
}

/// Ordered log of relocations, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, pos: usize) -> Option<&HistoryEntry> {
        self.entries.get(pos)
    }

    pub fn entry_mut(&mut self, pos: usize) -> Option<&mut HistoryEntry> {
        self.entries.get_mut(pos)
    }

    /// Position of the nearest applied entry, scanning from the end.
    pub fn undo_target(&self) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| entry.state == EntryState::Applied)
    }

    /// Position of the newest entry, only if it has been reversed.
    /// Older reversed entries are never reachable here.
    pub fn redo_target(&self) -> Option<usize> {
        match self.entries.last() {
            Some(entry) if entry.state == EntryState::Reversed => Some(self.entries.len() - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(employee: EmployeeId, state: EntryState) -> HistoryEntry {
        HistoryEntry {
            employee,
            supervisor: 1,
            subordinates: Vec::new(),
            state,
        }
    }

    #[test]
    fn undo_target_picks_nearest_applied_from_the_end() {
        let mut history = History::new();
        history.push(entry(10, EntryState::Applied));
        history.push(entry(11, EntryState::Applied));
        assert_eq!(history.undo_target(), Some(1));
    }

    #[test]
    fn undo_target_skips_reversed_tail() {
        let mut history = History::new();
        history.push(entry(10, EntryState::Applied));
        history.push(entry(11, EntryState::Reversed));
        assert_eq!(history.undo_target(), Some(0));
    }

    #[test]
    fn undo_target_none_when_empty_or_all_reversed() {
        let mut history = History::new();
        assert_eq!(history.undo_target(), None);
        history.push(entry(10, EntryState::Reversed));
        assert_eq!(history.undo_target(), None);
    }

    #[test]
    fn redo_target_requires_newest_entry_reversed() {
        let mut history = History::new();
        assert_eq!(history.redo_target(), None);

        history.push(entry(10, EntryState::Reversed));
        assert_eq!(history.redo_target(), Some(0));

        // A newer applied entry orphans the reversed one
        history.push(entry(11, EntryState::Applied));
        assert_eq!(history.redo_target(), None);
    }
}

//! CLI argument definitions using clap

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::EmployeeId;

/// Organizational chart manager: relocate employees and their reports with undo/redo
#[derive(Parser, Debug)]
#[command(name = "orgmv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Chart file (TOML); default: built-in sample chart
    #[arg(short, long, global = true)]
    pub chart: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the chart as a tree
    Show,

    /// Apply operations in order, then print the resulting chart
    Apply {
        /// Operations: move:EMPLOYEE:SUPERVISOR, undo, redo
        #[arg(num_args = 1..)]
        operations: Vec<OpSpec>,

        /// Print the operation history afterwards
        #[arg(long)]
        history: bool,
    },

    /// Walk through a move/undo/redo scenario on the sample chart
    Demo,

    /// Show chart statistics
    Info,
}

/// One scripted operation, parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpSpec {
    Move {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },
    Undo,
    Redo,
}

impl FromStr for OpSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            ["undo"] => Ok(OpSpec::Undo),
            ["redo"] => Ok(OpSpec::Redo),
            ["move", employee, supervisor] => {
                let employee: EmployeeId = employee
                    .parse()
                    .map_err(|_| format!("invalid employee id: {employee}"))?;
                let supervisor: EmployeeId = supervisor
                    .parse()
                    .map_err(|_| format!("invalid supervisor id: {supervisor}"))?;
                Ok(OpSpec::Move {
                    employee,
                    supervisor,
                })
            }
            _ => Err(format!(
                "invalid operation: {s} (expected move:EMPLOYEE:SUPERVISOR, undo, or redo)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_undo_redo() {
        assert_eq!(
            "move:12:2".parse::<OpSpec>(),
            Ok(OpSpec::Move {
                employee: 12,
                supervisor: 2
            })
        );
        assert_eq!("undo".parse::<OpSpec>(), Ok(OpSpec::Undo));
        assert_eq!("redo".parse::<OpSpec>(), Ok(OpSpec::Redo));
    }

    #[test]
    fn rejects_malformed_operations() {
        assert!("move:12".parse::<OpSpec>().is_err());
        assert!("move:a:2".parse::<OpSpec>().is_err());
        assert!("promote:12:2".parse::<OpSpec>().is_err());
        assert!("".parse::<OpSpec>().is_err());
    }
}

//! CLI-level errors (wraps domain and chart-loading errors)

use thiserror::Error;

use crate::config::ChartError;
use crate::domain::DomainError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Chart(#[from] ChartError),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => exitcode::DATAERR,
            CliError::Chart(e) => match e {
                ChartError::Io { .. } => exitcode::NOINPUT,
                ChartError::Parse { .. } => exitcode::DATAERR,
            },
        }
    }
}

//! Chart file loading (TOML)

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

use crate::domain::Employee;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("cannot read chart file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid chart file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a nested employee chart from a TOML file.
///
/// The top-level table is the root employee; reports nest via
/// `[[subordinates]]` tables:
///
/// ```toml
/// id = 1
/// name = "Ada Root"
///
/// [[subordinates]]
/// id = 2
/// name = "Ben Branch"
/// ```
///
/// Duplicate-id validation happens later, when the chart is handed to
/// the engine.
#[instrument]
pub fn load_chart(path: &Path) -> Result<Employee, ChartError> {
    let content = fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ChartError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssemblyError>;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("grid must have at least one node per axis, got {x_nodes} x {y_nodes}")]
    InvalidGrid { x_nodes: usize, y_nodes: usize },

    #[error("{name} has length {actual}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Boundary values come as (west, east, south, north).
    #[error("expected 4 boundary values (W, E, S, N), got {count}")]
    InvalidBoundary { count: usize },

    #[error("unknown log level {value:?}, expected one of trace, debug, info, warn, error")]
    InvalidLogLevel { value: String },

    #[error("failed to read parameter file {path}")]
    ParamFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parameter file {path}")]
    ParamParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AssemblyError {
    pub(crate) fn check_len(name: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(AssemblyError::LengthMismatch {
                name,
                expected,
                actual,
            })
        }
    }
}

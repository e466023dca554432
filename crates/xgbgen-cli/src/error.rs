use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use xgbgen_driver::DriverError;
use xgbgen_resolve::ResolveError;

/// Errors reported by the `xgbgen` binary.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Failed {operation} {}", path.display())]
    #[diagnostic(code(xgbgen::cli::io_error))]
    IoError {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Driver(#[from] DriverError),
}

/// Convert IO errors with context
pub fn convert_io_error(error: std::io::Error, path: PathBuf, operation: &str) -> CliError {
    CliError::IoError {
        path,
        operation: operation.to_string(),
        source: error,
    }
}

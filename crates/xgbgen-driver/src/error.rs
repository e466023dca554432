use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;
use xgbgen_codegen::CodegenError;
use xgbgen_resolve::ResolveError;
use xgbgen_syntax::SyntaxError;

/// Errors that stop a generator run.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("Could not read protocol description `{name}` from {}: {reason}", path.display())]
    #[diagnostic(
        code(xgbgen_driver::root_not_found),
        help("Check the protocol directory passed with --proto-path")
    )]
    RootNotFound {
        name: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Could not parse protocol description `{name}`")]
    #[diagnostic(code(xgbgen_driver::root_malformed))]
    RootMalformed {
        name: String,
        #[source]
        #[diagnostic_source]
        source: SyntaxError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}

/// Result type for generator runs.
pub type DriverResult<T> = Result<T, DriverError>;

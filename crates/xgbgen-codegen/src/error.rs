use thiserror::Error;
use miette::Diagnostic;
use xgbgen_resolve::ResolveError;

/// Errors that can occur while emitting a resolved document.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    /// An emitter found the tree in a state it cannot print.
    #[error("Cannot emit {category} `{name}`: {reason}")]
    #[diagnostic(code(xgbgen_codegen::emit))]
    Emit {
        category: &'static str,
        name: String,
        reason: String,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;

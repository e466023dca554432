use std::path::PathBuf;
use thiserror::Error;
use miette::Diagnostic;
use xgbgen_syntax::SyntaxError;

/// Errors that abort a resolution run.
///
/// Every variant is fatal: the first one raised stops the run and no output
/// is produced.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The description file for an import could not be read.
    #[error("Could not read protocol description for import `{name}` from {}: {reason}", path.display())]
    #[diagnostic(
        code(xgbgen_resolve::import_not_found),
        help("Is `{name}.xml` present in the protocol directory?")
    )]
    ImportNotFound {
        /// The imported document name.
        name: String,
        /// The file that was looked up.
        path: PathBuf,
        reason: String,
    },

    /// The description file for an import was read but is not a valid description.
    #[error("Could not parse protocol description for import `{name}`")]
    #[diagnostic(code(xgbgen_resolve::import_malformed))]
    ImportMalformed {
        name: String,
        #[source]
        #[diagnostic_source]
        source: SyntaxError,
    },

    /// A type name has no definition reachable from the document.
    #[error("Undefined type `{name}`: {reason}")]
    #[diagnostic(
        code(xgbgen_resolve::type_undefined),
        help("Declare `{name}`, or import the description that declares it")
    )]
    TypeUndefined {
        name: String,
        /// What was being resolved when the name came up empty.
        reason: String,
    },

    /// An expression has no constant value.
    #[error("Cannot evaluate `{expr}`: {reason}")]
    #[diagnostic(code(xgbgen_resolve::unsupported_expression))]
    UnsupportedExpression {
        /// Display form of the offending expression.
        expr: String,
        reason: String,
    },

    /// Following type aliases led back to a name already on the chain.
    #[error("Cyclic type alias involving `{name}`: {}", chain.join(" -> "))]
    #[diagnostic(code(xgbgen_resolve::alias_cycle))]
    AliasCycle {
        name: String,
        /// The alias hops taken, ending with the repeated name.
        chain: Vec<String>,
    },

    /// The wire size table could not be loaded.
    #[error("Invalid wire configuration{}: {reason}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    #[diagnostic(code(xgbgen_resolve::invalid_config))]
    InvalidConfig {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl ResolveError {
    pub(crate) fn unsupported(expr: impl ToString, reason: impl Into<String>) -> Self {
        ResolveError::UnsupportedExpression {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

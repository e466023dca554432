use thiserror::Error;
use miette::{Diagnostic, SourceSpan};

#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("XML error: {reason}")]
    #[diagnostic(code(xgbgen_syntax::xml))]
    Xml {
        reason: String,
        #[label("error occurred here")]
        span: Option<SourceSpan>,
    },

    #[error("Unexpected root element `{found}`")]
    #[diagnostic(
        code(xgbgen_syntax::unexpected_root),
        help("protocol descriptions must have an `xcb` root element")
    )]
    UnexpectedRoot {
        found: String,
        #[label("root element")]
        span: Option<SourceSpan>,
    },

    #[error("Element `{element}` is missing required attribute `{attribute}`")]
    #[diagnostic(code(xgbgen_syntax::missing_attribute))]
    MissingAttribute {
        element: String,
        attribute: String,
        #[label("in this element")]
        span: Option<SourceSpan>,
    },

    #[error("Attribute `{attribute}` of `{element}` has invalid value `{value}`")]
    #[diagnostic(code(xgbgen_syntax::invalid_attribute))]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        #[label("in this element")]
        span: Option<SourceSpan>,
    },

    #[error("Import names no protocol description")]
    #[diagnostic(
        code(xgbgen_syntax::empty_import),
        help("write the imported description name as the element text, e.g. `<import>xproto</import>`")
    )]
    EmptyImport {
        #[label("empty import")]
        span: Option<SourceSpan>,
    },

    #[error("Unknown element `{element}` inside `{parent}`")]
    #[diagnostic(code(xgbgen_syntax::unknown_element))]
    UnknownElement {
        element: String,
        parent: String,
        #[label("unknown element")]
        span: Option<SourceSpan>,
    },

    #[error("Invalid expression: {reason}")]
    #[diagnostic(code(xgbgen_syntax::invalid_expression))]
    InvalidExpression {
        reason: String,
        #[label("in this expression")]
        span: Option<SourceSpan>,
    },
}

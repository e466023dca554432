//! Entity tree and description reader for xcb protocol descriptions.
//!
//! This crate is responsible for:
//! - The in-memory entity tree of one description document ([`ast::Document`])
//! - The expression tree used for enum values, list lengths and expression fields
//! - Reading description text into a neutral element tree
//! - Building the typed entity tree from that element tree, validating
//!   required attributes as it goes
//!
//! Nothing here resolves names: imports come back unbound and implicit enum
//! values are left unassigned. See `xgbgen-resolve` for those passes.

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Document, Expression, Field, Import};
pub use error::SyntaxError;
pub use parser::{parse_document, ParseResult};

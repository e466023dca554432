#![doc = include_str!("../README.md")]

pub mod config;
pub mod enums;
pub mod error;
pub mod eval;
pub mod imports;
pub mod types;
pub mod validate;

pub use config::WireConfig;
pub use enums::assign_enum_values;
pub use error::{ResolveError, ResolveResult};
pub use eval::{evaluate, evaluate_in, EvalScope};
pub use imports::{resolve_imports, DocumentSource, FsSource, MemorySource};
pub use types::TypeResolver;
pub use validate::check_field_types;

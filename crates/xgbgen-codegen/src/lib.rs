//! Emission boundary for resolved protocol descriptions.
//!
//! An [`Emitter`] prints one category of declarations at a time. The
//! [`dispatch`] function walks a resolved document in a fixed category
//! order and hands each category to the emitter through a shared
//! [`EmitContext`], which also exposes the type engine so emitters can ask
//! for wire sizes and alias targets while they print.

pub mod context;
pub mod dispatch;
pub mod emitter;
pub mod error;
pub mod outline;

pub use context::EmitContext;
pub use dispatch::{dispatch, Category};
pub use emitter::Emitter;
pub use error::{CodegenError, CodegenResult};
pub use outline::OutlineEmitter;

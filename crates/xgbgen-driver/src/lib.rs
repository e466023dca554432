//! One generator run over one protocol description.
//!
//! [`Generator`] strings the passes of `xgbgen-resolve` and the dispatcher
//! of `xgbgen-codegen` together and reports the first failure as a
//! [`DriverError`].

pub mod error;
pub mod generator;

pub use error::{DriverError, DriverResult};
pub use generator::Generator;

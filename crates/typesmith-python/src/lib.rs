//! Python backend for typesmith.
//!
//! Turns a type graph into one Python module containing:
//! - `typing` annotations for every class, enum and property
//! - validating converters (`from_dict` / `to_dict`) built from a small set
//!   of support combinators, emitted only when used
//!
//! Modules:
//! - `naming` - identifier legalization and casing policies
//! - `typegen` - annotation rendering, converter synthesis, declaration emission

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod naming;
pub mod typegen;

mod error;

#[cfg(test)]
pub mod test_utils;

pub use error::{Location, TypegenError};
pub use naming::{NameStyle, make_name};
pub use typegen::{Config, Emitter, PythonVersion, generate};

/// Result type for generation.
pub type Result<T> = std::result::Result<T, TypegenError>;

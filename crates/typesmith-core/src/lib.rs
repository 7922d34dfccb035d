#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by typesmith backends.
//!
//! - `ir` - the type graph every backend renders from
//! - `words` - splitting arbitrary text into words
//! - `legalize` - the generic character legalization primitive
//! - `utils` - word casing helpers
//! - `describe` - description lookup hook
//!
//! Backends never build the graph themselves. It arrives fully inferred, with
//! canonical class and enum names already assigned.

pub mod describe;
pub mod ir;
pub mod legalize;
pub mod utils;
pub mod words;

#[cfg(test)]
mod ir_tests;

pub use describe::{DescriptionTable, Descriptions, NoDescriptions};
pub use ir::{
    ClassType, EnumType, Primitive, Property, StringTransform, Type, TypeGraph, TypeId, TypeKind,
    UnionType,
};
pub use words::{DefaultSplitter, Word, WordSplitter, split_into_words};

/// Errors that can occur while loading a type graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid type graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node points at a type id outside the graph.
    #[error("type {id} references missing type {target}")]
    DanglingReference { id: TypeId, target: TypeId },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

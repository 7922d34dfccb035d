//! Python module generation from a type graph.
//!
//! - `render` - type annotations (`List[int]`, `Optional['Person']`)
//! - `convert` - validating converters, parallel to the annotations
//! - `declare` / `members` - class and enum bodies, generated methods
//! - `emitter` - the pass itself and module assembly
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use typesmith_core::{ClassType, NoDescriptions, Primitive, Property, Type, TypeGraph};
//! use typesmith_python::{Config, generate};
//!
//! let mut graph = TypeGraph::new();
//! let string = graph.add_primitive(Primitive::String);
//! let person = graph.add(Type::Class(
//!     ClassType::new("Person").with_property("name", Property::new("name", string)),
//! ));
//!
//! let output = generate(
//!     &graph,
//!     &[person],
//!     &IndexMap::new(),
//!     &NoDescriptions,
//!     Config::new().just_types(true),
//! )?;
//! assert_eq!(output, "class Person:\n    name: str\n");
//! # Ok::<(), typesmith_python::TypegenError>(())
//! ```

mod combinators;
mod config;
mod convert;
mod declare;
mod emitter;
mod imports;
mod members;
mod render;
mod tracker;

#[cfg(test)]
mod render_tests;

pub use combinators::{Combinator, DATETIME_PATTERN, TypeVar, UsedCombinators};
pub use config::{Config, PythonVersion};
pub use convert::{Converter, ConverterSynthesizer, Direction};
pub use emitter::{Emitter, generate};
pub use imports::{Import, ImportRegistry};
pub use render::{TypeRenderer, union_member_order};
pub use tracker::{DeclState, DeclarationTracker};

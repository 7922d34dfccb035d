//! Generation errors.
//!
//! Every error here means the upstream graph broke its contract with this
//! backend. None of them are user-facing conditions; they abort generation.

use std::fmt;

use typesmith_core::{StringTransform, TypeId, TypeKind};

/// Where in the graph a failure happened, e.g. `Person.tags[]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Inside the declaration of a named type.
    pub fn type_root(name: &str) -> Self {
        Self(name.to_string())
    }

    /// A declaration request for a type that has no name.
    pub fn declaration(id: TypeId) -> Self {
        Self(format!("declaration of {id}"))
    }

    /// The top-level entry point `name`.
    pub fn top_level(name: &str) -> Self {
        Self(format!("top-level `{name}`"))
    }

    pub fn property(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Array element.
    pub fn item(&self) -> Self {
        Self(format!("{}[]", self.0))
    }

    /// Map value.
    pub fn value(&self) -> Self {
        Self(format!("{}{{}}", self.0))
    }

    /// Union member at `index`, in rendering order.
    pub fn member(&self, index: usize) -> Self {
        Self(format!("{}|{index}", self.0))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that abort Python generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypegenError {
    #[error("unsupported transformed string `{kind}` at {location}")]
    UnsupportedTransform {
        kind: StringTransform,
        location: Location,
    },

    /// Only classes and enums get declarations; everything else is inline.
    #[error("{kind} cannot be declared on its own ({location})")]
    Undeclarable { kind: TypeKind, location: Location },

    #[error("reference to unknown type {id} at {location}")]
    UnknownType { id: TypeId, location: Location },

    #[error("union without members at {location}")]
    EmptyUnion { location: Location },

    #[error("type `{name}` is declared more than once")]
    AlreadyDeclared { name: String },
}

//! Language-agnostic type graph.
//!
//! Types live in an arena (`TypeGraph`) and point at each other through
//! `TypeId`s, so recursive and mutually recursive classes need no special
//! representation. The graph is built once by the inference pipeline and is
//! read-only for every backend.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Index of a type in its `TypeGraph`.
///
/// Ids are identity: two structurally equal classes with different ids are
/// different types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a TypeId from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scalar JSON shapes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Primitive {
    /// Anything at all; no validation possible.
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

/// Strings whose content was recognized as a richer value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringTransform {
    DateTime,
    Date,
    Time,
    Uuid,
    Uri,
    IntegerString,
    BoolString,
}

impl StringTransform {
    pub fn name(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Uuid => "uuid",
            Self::Uri => "uri",
            Self::IntegerString => "integer-string",
            Self::BoolString => "bool-string",
        }
    }
}

impl fmt::Display for StringTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A class property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Key in the JSON object, before legalization.
    pub json_key: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
    /// The key may be missing from the object.
    #[serde(default)]
    pub optional: bool,
}

impl Property {
    pub fn new(json_key: impl Into<String>, ty: TypeId) -> Self {
        Self {
            json_key: json_key.into(),
            ty,
            optional: false,
        }
    }

    /// Mark the property as possibly absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A record with named, ordered properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassType {
    /// Canonical, already legalized name.
    pub name: String,
    /// Legalized property name -> property, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Append a property (builder form).
    pub fn with_property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, property: Property) {
        self.properties.insert(name.into(), property);
    }
}

/// A closed set of string literals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// Canonical, already legalized name.
    pub name: String,
    /// Legalized case name -> original literal.
    #[serde(default)]
    pub cases: IndexMap<String, String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: IndexMap::new(),
        }
    }

    pub fn with_case(mut self, name: impl Into<String>, literal: impl Into<String>) -> Self {
        self.cases.insert(name.into(), literal.into());
        self
    }
}

/// Set of alternatives. Members are pairwise distinct kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    pub members: Vec<TypeId>,
}

impl UnionType {
    pub fn new(members: impl IntoIterator<Item = TypeId>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }
}

/// A node of the type graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Type {
    Primitive(Primitive),
    Array { items: TypeId },
    /// JSON object used as a dictionary; keys are always strings.
    Map { values: TypeId },
    Class(ClassType),
    Enum(EnumType),
    Union(UnionType),
    TransformedString(StringTransform),
}

impl Type {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive(p) => TypeKind::Primitive(*p),
            Self::Array { .. } => TypeKind::Array,
            Self::Map { .. } => TypeKind::Map,
            Self::Class(_) => TypeKind::Class,
            Self::Enum(_) => TypeKind::Enum,
            Self::Union(_) => TypeKind::Union,
            Self::TransformedString(t) => TypeKind::TransformedString(*t),
        }
    }

    /// Canonical name of a class or enum.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Class(c) => Some(&c.name),
            Self::Enum(e) => Some(&e.name),
            _ => None,
        }
    }

    /// Type ids this node points at directly.
    pub fn references(&self) -> Vec<TypeId> {
        match self {
            Self::Primitive(_) | Self::Enum(_) | Self::TransformedString(_) => Vec::new(),
            Self::Array { items } => vec![*items],
            Self::Map { values } => vec![*values],
            Self::Class(c) => c.properties.values().map(|p| p.ty).collect(),
            Self::Union(u) => u.members.clone(),
        }
    }
}

/// Shape of a type without its contents, for ordering and diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Primitive(Primitive),
    Array,
    Map,
    Class,
    Enum,
    Union,
    TransformedString(StringTransform),
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::Array => f.write_str("array"),
            Self::Map => f.write_str("map"),
            Self::Class => f.write_str("class"),
            Self::Enum => f.write_str("enum"),
            Self::Union => f.write_str("union"),
            Self::TransformedString(t) => write!(f, "transformed string `{t}`"),
        }
    }
}

/// Arena of types addressed by `TypeId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeGraph {
    types: Vec<Type>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an already-built graph from its JSON form and check that every
    /// reference resolves.
    pub fn from_json(json: &str) -> Result<Self> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }

    /// Check that every reference points inside the graph.
    pub fn validate(&self) -> Result<()> {
        for (id, ty) in self.iter() {
            if let Some(target) = ty.references().into_iter().find(|t| self.get(*t).is_none()) {
                return Err(Error::DanglingReference { id, target });
            }
        }
        Ok(())
    }

    pub fn add(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub fn add_primitive(&mut self, primitive: Primitive) -> TypeId {
        self.add(Type::Primitive(primitive))
    }

    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    /// Mutable access to a class while the graph is still being assembled.
    pub fn class_mut(&mut self, id: TypeId) -> Option<&mut ClassType> {
        match self.types.get_mut(id.index()) {
            Some(Type::Class(class)) => Some(class),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }

    pub fn is_null(&self, id: TypeId) -> bool {
        matches!(self.get(id), Some(Type::Primitive(Primitive::Null)))
    }

    /// For a union of exactly `{null, T}`, return `T`.
    ///
    /// Such a union always means "optional T"; backends must never treat it
    /// as a general union.
    pub fn nullable_inner(&self, id: TypeId) -> Option<TypeId> {
        let Some(Type::Union(union)) = self.get(id) else {
            return None;
        };
        let [a, b] = union.members.as_slice() else {
            return None;
        };
        match (self.is_null(*a), self.is_null(*b)) {
            (true, false) => Some(*b),
            (false, true) => Some(*a),
            _ => None,
        }
    }

    /// Whether `null` is already an accepted value of the type.
    pub fn accepts_null(&self, id: TypeId) -> bool {
        match self.get(id) {
            Some(Type::Primitive(Primitive::Null | Primitive::Any)) => true,
            Some(Type::Union(union)) => union.members.iter().any(|m| self.is_null(*m)),
            _ => false,
        }
    }
}

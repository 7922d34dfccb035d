//! Description lookup hook.
//!
//! Descriptions come from schema titles and comments gathered upstream.
//! Backends only ask; they never decide what a type is called or described as.

use std::collections::HashMap;

use crate::TypeId;

/// Source of human-written descriptions for types and properties.
pub trait Descriptions {
    fn type_description(&self, _id: TypeId) -> Option<&str> {
        None
    }

    fn property_description(&self, _class: TypeId, _property: &str) -> Option<&str> {
        None
    }
}

impl<T: Descriptions + ?Sized> Descriptions for &T {
    fn type_description(&self, id: TypeId) -> Option<&str> {
        (*self).type_description(id)
    }

    fn property_description(&self, class: TypeId, property: &str) -> Option<&str> {
        (*self).property_description(class, property)
    }
}

/// No descriptions at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDescriptions;

impl Descriptions for NoDescriptions {}

/// In-memory descriptions keyed by type and by (class, property name).
#[derive(Clone, Debug, Default)]
pub struct DescriptionTable {
    types: HashMap<TypeId, String>,
    properties: HashMap<(TypeId, String), String>,
}

impl DescriptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe_type(mut self, id: TypeId, text: impl Into<String>) -> Self {
        self.types.insert(id, text.into());
        self
    }

    pub fn describe_property(
        mut self,
        class: TypeId,
        property: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.properties.insert((class, property.into()), text.into());
        self
    }
}

impl Descriptions for DescriptionTable {
    fn type_description(&self, id: TypeId) -> Option<&str> {
        self.types.get(&id).map(String::as_str)
    }

    fn property_description(&self, class: TypeId, property: &str) -> Option<&str> {
        self.properties
            .get(&(class, property.to_string()))
            .map(String::as_str)
    }
}

//! Test fixtures and helpers.

use indexmap::IndexMap;
use typesmith_core::{
    ClassType, Descriptions, EnumType, NoDescriptions, Primitive, Property, Type, TypeGraph,
    TypeId, UnionType,
};

use crate::typegen::{Config, generate};

/// Small graph builder for tests.
#[derive(Default)]
pub struct Fixture {
    pub graph: TypeGraph,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitive(&mut self, primitive: Primitive) -> TypeId {
        self.graph.add_primitive(primitive)
    }

    pub fn array(&mut self, items: TypeId) -> TypeId {
        self.graph.add(Type::Array { items })
    }

    pub fn map(&mut self, values: TypeId) -> TypeId {
        self.graph.add(Type::Map { values })
    }

    pub fn union(&mut self, members: impl IntoIterator<Item = TypeId>) -> TypeId {
        self.graph.add(Type::Union(UnionType::new(members)))
    }

    /// `{null, inner}`
    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        let null = self.primitive(Primitive::Null);
        self.union([inner, null])
    }

    pub fn class(&mut self, name: &str) -> TypeId {
        self.graph.add(Type::Class(ClassType::new(name)))
    }

    /// Add a property whose JSON key equals its name.
    pub fn property(&mut self, class: TypeId, name: &str, ty: TypeId) {
        self.insert(class, name, Property::new(name, ty));
    }

    pub fn insert(&mut self, class: TypeId, name: &str, property: Property) {
        self.graph
            .class_mut(class)
            .expect("fixture class exists")
            .insert(name, property);
    }

    pub fn enumeration(&mut self, name: &str, cases: &[(&str, &str)]) -> TypeId {
        let enum_type = cases
            .iter()
            .fold(EnumType::new(name), |e, (case, literal)| {
                e.with_case(*case, *literal)
            });
        self.graph.add(Type::Enum(enum_type))
    }

    /// `Person { name: str, age: {int, null} }`
    pub fn person() -> (Self, TypeId) {
        let mut fixture = Self::new();
        let string = fixture.primitive(Primitive::String);
        let int = fixture.primitive(Primitive::Integer);
        let age = fixture.nullable(int);
        let person = fixture.class("Person");
        fixture.property(person, "name", string);
        fixture.property(person, "age", age);
        (fixture, person)
    }
}

/// Generate with no top-levels and no descriptions.
pub fn emit(graph: &TypeGraph, order: &[TypeId], config: Config) -> String {
    emit_with(graph, order, &[], &NoDescriptions, config)
}

pub fn emit_with(
    graph: &TypeGraph,
    order: &[TypeId],
    top_levels: &[(&str, TypeId)],
    descriptions: &dyn Descriptions,
    config: Config,
) -> String {
    let top_levels: IndexMap<String, TypeId> = top_levels
        .iter()
        .map(|(name, id)| (name.to_string(), *id))
        .collect();
    generate(graph, order, &top_levels, descriptions, config).expect("generation succeeds")
}

/// Annotation-only output without a header.
pub fn emit_types(graph: &TypeGraph, order: &[TypeId]) -> String {
    emit(graph, order, Config::new().just_types(true))
}

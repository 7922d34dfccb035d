//! Validating converters.
//!
//! A converter mirrors the annotation of the same type: every `List[...]`
//! becomes a `from_list`, every `Optional[...]` a `from_optional`, and a
//! general union tries its members in the order the annotation lists them.

use typesmith_core::{Primitive, Property, StringTransform, Type, TypeGraph, TypeId};

use super::combinators::{Combinator, UsedCombinators};
use super::render::{UnionShape, lookup};
use crate::{Location, Result, TypegenError};

/// Which way a converter goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// JSON value to Python value (`from_dict`).
    Deserialize,
    /// Python value to JSON value (`to_dict`).
    Serialize,
}

/// A converter expression, before it is written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Converter {
    /// Accepts anything unchanged.
    Identity,
    /// `f(x)`
    Function(Combinator),
    /// `f(inner, x)`
    Nested(Combinator, Box<Converter>),
    /// `from_union([a, b], x)`
    Union(Vec<Converter>),
    /// `Name.from_dict(x)`
    ClassFromDict(String),
    /// `Name(x)`, the enum's own lookup by value.
    EnumValue(String),
    /// `f(Name, x)`
    Typed(Combinator, String),
}

impl Converter {
    /// The converter as a one-argument callable.
    pub fn callable(&self) -> String {
        match self {
            Self::Identity => "lambda x: x".to_string(),
            Self::Function(combinator) => combinator.name().to_string(),
            Self::ClassFromDict(name) => format!("{name}.from_dict"),
            Self::EnumValue(name) => name.clone(),
            Self::Nested(..) | Self::Union(_) | Self::Typed(..) => {
                format!("lambda x: {}", self.apply("x"))
            }
        }
    }

    /// The converter applied to the expression `value`.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Identity => value.to_string(),
            Self::Function(combinator) => format!("{}({value})", combinator.name()),
            Self::Nested(combinator, inner) => {
                format!("{}({}, {value})", combinator.name(), inner.callable())
            }
            Self::Union(members) => {
                let members: Vec<String> = members.iter().map(Converter::callable).collect();
                format!(
                    "{}([{}], {value})",
                    Combinator::FromUnion.name(),
                    members.join(", ")
                )
            }
            Self::ClassFromDict(name) => format!("{name}.from_dict({value})"),
            Self::EnumValue(name) => format!("{name}({value})"),
            Self::Typed(combinator, name) => format!("{}({name}, {value})", combinator.name()),
        }
    }
}

/// Builds converters and records every combinator they use.
pub struct ConverterSynthesizer<'a> {
    graph: &'a TypeGraph,
}

impl<'a> ConverterSynthesizer<'a> {
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self { graph }
    }

    pub fn deserializer(
        &self,
        id: TypeId,
        location: &Location,
        used: &mut UsedCombinators,
    ) -> Result<Converter> {
        self.convert(id, Direction::Deserialize, location, used)
    }

    pub fn serializer(
        &self,
        id: TypeId,
        location: &Location,
        used: &mut UsedCombinators,
    ) -> Result<Converter> {
        self.convert(id, Direction::Serialize, location, used)
    }

    /// Converter of a class member. A property that may be missing is
    /// wrapped in `from_optional` unless its type already accepts `None`.
    pub fn property_converter(
        &self,
        property: &Property,
        direction: Direction,
        location: &Location,
        used: &mut UsedCombinators,
    ) -> Result<Converter> {
        let converter = self.convert(property.ty, direction, location, used)?;
        if !property.optional || self.graph.accepts_null(property.ty) {
            return Ok(converter);
        }
        Ok(nested(Combinator::FromOptional, converter, used))
    }

    fn convert(
        &self,
        id: TypeId,
        direction: Direction,
        location: &Location,
        used: &mut UsedCombinators,
    ) -> Result<Converter> {
        let ty = lookup(self.graph, id, location)?;
        match ty {
            Type::Primitive(primitive) => Ok(convert_primitive(*primitive, used)),
            Type::Array { items } => {
                let items = self.convert(*items, direction, &location.item(), used)?;
                Ok(nested(Combinator::FromList, items, used))
            }
            Type::Map { values } => {
                let values = self.convert(*values, direction, &location.value(), used)?;
                Ok(nested(Combinator::FromDict, values, used))
            }
            Type::Class(class) => Ok(match direction {
                Direction::Deserialize => Converter::ClassFromDict(class.name.clone()),
                Direction::Serialize => typed(Combinator::ToClass, &class.name, used),
            }),
            Type::Enum(enum_type) => Ok(match direction {
                Direction::Deserialize => Converter::EnumValue(enum_type.name.clone()),
                Direction::Serialize => typed(Combinator::ToEnum, &enum_type.name, used),
            }),
            Type::Union(union) => match UnionShape::of(self.graph, &union.members) {
                UnionShape::Empty => Err(TypegenError::EmptyUnion {
                    location: location.clone(),
                }),
                UnionShape::Single(only) => {
                    self.convert(only, direction, &location.member(0), used)
                }
                UnionShape::Nullable(inner) => {
                    let inner = self.convert(inner, direction, &location.member(1), used)?;
                    Ok(nested(Combinator::FromOptional, inner, used))
                }
                UnionShape::General(members) => {
                    used.mark(Combinator::FromUnion);
                    members
                        .iter()
                        .enumerate()
                        .map(|(i, member)| {
                            self.convert(*member, direction, &location.member(i), used)
                        })
                        .collect::<Result<Vec<_>>>()
                        .map(Converter::Union)
                }
            },
            Type::TransformedString(StringTransform::DateTime) => Ok(function(
                match direction {
                    Direction::Deserialize => Combinator::FromDatetime,
                    Direction::Serialize => Combinator::ToDatetime,
                },
                used,
            )),
            Type::TransformedString(kind) => Err(TypegenError::UnsupportedTransform {
                kind: *kind,
                location: location.clone(),
            }),
        }
    }
}

/// Primitives convert the same way in both directions; `from_float` widens
/// ints on the way out too.
fn convert_primitive(primitive: Primitive, used: &mut UsedCombinators) -> Converter {
    let combinator = match primitive {
        Primitive::Any => return Converter::Identity,
        Primitive::Null => Combinator::FromNone,
        Primitive::Bool => Combinator::FromBool,
        Primitive::Integer => Combinator::FromInt,
        Primitive::Double => Combinator::FromFloat,
        Primitive::String => Combinator::FromStr,
    };
    function(combinator, used)
}

fn function(combinator: Combinator, used: &mut UsedCombinators) -> Converter {
    used.mark(combinator);
    Converter::Function(combinator)
}

fn nested(combinator: Combinator, inner: Converter, used: &mut UsedCombinators) -> Converter {
    used.mark(combinator);
    Converter::Nested(combinator, Box::new(inner))
}

fn typed(combinator: Combinator, name: &str, used: &mut UsedCombinators) -> Converter {
    used.mark(combinator);
    Converter::Typed(combinator, name.to_string())
}

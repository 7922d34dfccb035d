//! Type annotations.

use typesmith_core::{Primitive, Property, StringTransform, Type, TypeGraph, TypeId};

use super::imports::{Import, ImportRegistry};
use super::tracker::DeclarationTracker;
use crate::{Location, Result, TypegenError};

/// Resolve `id`, reporting a dangling reference at `location`.
pub(crate) fn lookup<'g>(graph: &'g TypeGraph, id: TypeId, location: &Location) -> Result<&'g Type> {
    graph.get(id).ok_or_else(|| TypegenError::UnknownType {
        id,
        location: location.clone(),
    })
}

/// Rank of a union member's kind. Unknown ids sort last.
fn kind_rank(ty: Option<&Type>) -> u8 {
    match ty {
        Some(Type::Primitive(Primitive::Null)) => 0,
        Some(Type::Primitive(Primitive::Bool)) => 1,
        Some(Type::Primitive(Primitive::Integer)) => 2,
        Some(Type::Primitive(Primitive::Double)) => 3,
        Some(Type::Primitive(Primitive::String)) => 4,
        Some(Type::TransformedString(_)) => 5,
        Some(Type::Array { .. }) => 6,
        Some(Type::Map { .. }) => 7,
        Some(Type::Enum(_)) => 8,
        Some(Type::Class(_)) => 9,
        Some(Type::Union(_)) => 10,
        Some(Type::Primitive(Primitive::Any)) => 11,
        None => u8::MAX,
    }
}

/// Union members in rendering order: by kind, then name, then id.
///
/// Annotations and converters both iterate members in this order, so the
/// n-th type in `Union[...]` is always the n-th candidate of `from_union`.
pub fn union_member_order(graph: &TypeGraph, members: &[TypeId]) -> Vec<TypeId> {
    let mut ordered = members.to_vec();
    ordered.sort_by_key(|&id| {
        let ty = graph.get(id);
        let name = ty.and_then(Type::declared_name).unwrap_or_default();
        (kind_rank(ty), name, id)
    });
    ordered
}

/// How a union is written, shared by annotations and converters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum UnionShape {
    Empty,
    /// One member; the union is just that member.
    Single(TypeId),
    /// `{null, T}`.
    Nullable(TypeId),
    /// Two or more members, in rendering order.
    General(Vec<TypeId>),
}

impl UnionShape {
    pub(crate) fn of(graph: &TypeGraph, members: &[TypeId]) -> Self {
        let ordered = union_member_order(graph, members);
        match ordered.as_slice() {
            [] => Self::Empty,
            [only] => Self::Single(*only),
            [null, inner] if graph.is_null(*null) && !graph.is_null(*inner) => {
                Self::Nullable(*inner)
            }
            _ => Self::General(ordered),
        }
    }
}

/// Maps IR types to Python annotations.
///
/// Reads declaration state; writes only to the import registry it is given.
pub struct TypeRenderer<'a> {
    graph: &'a TypeGraph,
    tracker: &'a DeclarationTracker,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(graph: &'a TypeGraph, tracker: &'a DeclarationTracker) -> Self {
        Self { graph, tracker }
    }

    pub fn render(
        &self,
        id: TypeId,
        location: &Location,
        imports: &mut ImportRegistry,
    ) -> Result<String> {
        let ty = lookup(self.graph, id, location)?;
        match ty {
            Type::Primitive(primitive) => Ok(Self::render_primitive(*primitive, imports)),
            Type::Array { items } => {
                imports.add(Import::LIST);
                let items = self.render(*items, &location.item(), imports)?;
                Ok(format!("List[{items}]"))
            }
            Type::Map { values } => {
                imports.add(Import::DICT);
                let values = self.render(*values, &location.value(), imports)?;
                Ok(format!("Dict[str, {values}]"))
            }
            Type::Class(class) => Ok(self.reference(id, &class.name)),
            Type::Enum(enum_type) => Ok(self.reference(id, &enum_type.name)),
            Type::Union(union) => match UnionShape::of(self.graph, &union.members) {
                UnionShape::Empty => Err(TypegenError::EmptyUnion {
                    location: location.clone(),
                }),
                UnionShape::Single(only) => self.render(only, &location.member(0), imports),
                UnionShape::Nullable(inner) => {
                    imports.add(Import::OPTIONAL);
                    let inner = self.render(inner, &location.member(1), imports)?;
                    Ok(format!("Optional[{inner}]"))
                }
                UnionShape::General(members) => {
                    imports.add(Import::UNION);
                    let members = members
                        .iter()
                        .enumerate()
                        .map(|(i, member)| self.render(*member, &location.member(i), imports))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(format!("Union[{}]", members.join(", ")))
                }
            },
            Type::TransformedString(StringTransform::DateTime) => {
                imports.add(Import::DATETIME);
                Ok("datetime".to_string())
            }
            Type::TransformedString(kind) => Err(TypegenError::UnsupportedTransform {
                kind: *kind,
                location: location.clone(),
            }),
        }
    }

    /// Annotation of a class member. A property that may be missing is
    /// `Optional` unless its type already accepts `None`.
    pub fn render_property(
        &self,
        property: &Property,
        location: &Location,
        imports: &mut ImportRegistry,
    ) -> Result<String> {
        if !property.optional || self.graph.accepts_null(property.ty) {
            return self.render(property.ty, location, imports);
        }
        imports.add(Import::OPTIONAL);
        let inner = self.render(property.ty, location, imports)?;
        Ok(format!("Optional[{inner}]"))
    }

    fn render_primitive(primitive: Primitive, imports: &mut ImportRegistry) -> String {
        let annotation = match primitive {
            Primitive::Any => {
                imports.add(Import::ANY);
                "Any"
            }
            Primitive::Null => "None",
            Primitive::Bool => "bool",
            Primitive::Integer => "int",
            Primitive::Double => "float",
            Primitive::String => "str",
        };
        annotation.to_string()
    }

    /// Quoted unless the declaration is complete.
    fn reference(&self, id: TypeId, name: &str) -> String {
        if self.tracker.is_declared(id) {
            name.to_string()
        } else {
            format!("'{name}'")
        }
    }
}

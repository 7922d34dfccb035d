use indoc::indoc;

use crate::{
    ClassType, EnumType, Error, Primitive, Property, StringTransform, Type, TypeGraph, TypeId,
    TypeKind, UnionType,
};

fn person_graph() -> (TypeGraph, TypeId) {
    let mut graph = TypeGraph::new();
    let string = graph.add_primitive(Primitive::String);
    let int = graph.add_primitive(Primitive::Integer);
    let null = graph.add_primitive(Primitive::Null);
    let age = graph.add(Type::Union(UnionType::new([int, null])));
    let person = graph.add(Type::Class(
        ClassType::new("Person")
            .with_property("name", Property::new("name", string))
            .with_property("age", Property::new("age", age)),
    ));
    (graph, person)
}

#[test]
fn ids_are_assigned_in_insertion_order() {
    let mut graph = TypeGraph::new();
    let a = graph.add_primitive(Primitive::Bool);
    let b = graph.add_primitive(Primitive::String);

    assert_eq!(a.as_u32(), 0);
    assert_eq!(b.as_u32(), 1);
    assert_eq!(graph.len(), 2);
    assert_eq!(b.to_string(), "#1");
}

#[test]
fn nullable_inner_detects_null_pair() {
    let (graph, person) = person_graph();
    let Some(Type::Class(class)) = graph.get(person) else {
        panic!("expected class");
    };
    let age = class.properties["age"].ty;

    let inner = graph.nullable_inner(age).expect("optional int");
    assert_eq!(graph.get(inner), Some(&Type::Primitive(Primitive::Integer)));
}

#[test]
fn nullable_inner_ignores_wider_unions() {
    let mut graph = TypeGraph::new();
    let null = graph.add_primitive(Primitive::Null);
    let int = graph.add_primitive(Primitive::Integer);
    let string = graph.add_primitive(Primitive::String);
    let wide = graph.add(Type::Union(UnionType::new([null, int, string])));
    let plain = graph.add(Type::Union(UnionType::new([int, string])));

    assert_eq!(graph.nullable_inner(wide), None);
    assert_eq!(graph.nullable_inner(plain), None);
    assert_eq!(graph.nullable_inner(int), None);
}

#[test]
fn accepts_null() {
    let mut graph = TypeGraph::new();
    let null = graph.add_primitive(Primitive::Null);
    let any = graph.add_primitive(Primitive::Any);
    let int = graph.add_primitive(Primitive::Integer);
    let union = graph.add(Type::Union(UnionType::new([int, null])));

    assert!(graph.accepts_null(null));
    assert!(graph.accepts_null(any));
    assert!(graph.accepts_null(union));
    assert!(!graph.accepts_null(int));
}

#[test]
fn class_mut_allows_self_reference() {
    let mut graph = TypeGraph::new();
    let node = graph.add(Type::Class(ClassType::new("Node")));
    graph
        .class_mut(node)
        .expect("class")
        .insert("next", Property::new("next", node).optional());

    assert_eq!(graph.get(node).and_then(Type::declared_name), Some("Node"));
    assert_eq!(graph.get(node).map(Type::references), Some(vec![node]));
    assert!(graph.validate().is_ok());
}

#[test]
fn class_mut_rejects_non_classes() {
    let mut graph = TypeGraph::new();
    let e = graph.add(Type::Enum(EnumType::new("Color").with_case("RED", "red")));

    assert!(graph.class_mut(e).is_none());
}

#[test]
fn kind_display() {
    assert_eq!(TypeKind::Primitive(Primitive::Double).to_string(), "double");
    assert_eq!(TypeKind::Union.to_string(), "union");
    assert_eq!(
        TypeKind::TransformedString(StringTransform::Uuid).to_string(),
        "transformed string `uuid`"
    );
}

#[test]
fn from_json_loads_graph() {
    let json = indoc! {r#"
        {
          "types": [
            { "primitive": "string" },
            { "transformed-string": "date-time" },
            { "array": { "items": 1 } },
            { "class": {
                "name": "Event",
                "properties": {
                  "title": { "json_key": "title", "type": 0 },
                  "occurrences": { "json_key": "occurrences", "type": 2, "optional": true }
                }
            } }
          ]
        }
    "#};

    let graph = TypeGraph::from_json(json).expect("valid graph");

    assert_eq!(graph.len(), 4);
    let Some(Type::Class(event)) = graph.get(TypeId::from_raw(3)) else {
        panic!("expected class");
    };
    assert_eq!(event.name, "Event");
    assert!(!event.properties["title"].optional);
    assert!(event.properties["occurrences"].optional);
    assert_eq!(
        graph.get(TypeId::from_raw(1)),
        Some(&Type::TransformedString(StringTransform::DateTime))
    );
}

#[test]
fn from_json_rejects_dangling_reference() {
    let json = r#"{ "types": [ { "map": { "values": 7 } } ] }"#;

    let err = TypeGraph::from_json(json).expect_err("dangling");

    assert!(matches!(
        err,
        Error::DanglingReference { id, target } if id.as_u32() == 0 && target.as_u32() == 7
    ));
    assert_eq!(err.to_string(), "type #0 references missing type #7");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = TypeGraph::from_json(r#"{ "types": [ { "tuple": [] } ] }"#).expect_err("bad");

    assert!(matches!(err, Error::Json(_)));
}

use typesmith_core::{Primitive, Property, StringTransform, Type, TypeGraph, TypeId};

use super::imports::{Import, ImportRegistry};
use super::render::{TypeRenderer, union_member_order};
use super::tracker::DeclarationTracker;
use crate::test_utils::Fixture;
use crate::{Location, TypegenError};

fn render(graph: &TypeGraph, id: TypeId) -> (String, Vec<Import>) {
    let tracker = DeclarationTracker::new();
    let mut imports = ImportRegistry::new();
    let annotation = TypeRenderer::new(graph, &tracker)
        .render(id, &Location::type_root("Test"), &mut imports)
        .unwrap();
    (annotation, imports.iter().collect())
}

fn render_err(graph: &TypeGraph, id: TypeId, location: &Location) -> TypegenError {
    let tracker = DeclarationTracker::new();
    let mut imports = ImportRegistry::new();
    TypeRenderer::new(graph, &tracker)
        .render(id, location, &mut imports)
        .unwrap_err()
}

#[test]
fn primitives() {
    let mut f = Fixture::new();
    let cases = [
        (Primitive::Null, "None"),
        (Primitive::Bool, "bool"),
        (Primitive::Integer, "int"),
        (Primitive::Double, "float"),
        (Primitive::String, "str"),
    ];
    for (primitive, expected) in cases {
        let id = f.primitive(primitive);
        let (annotation, imports) = render(&f.graph, id);
        assert_eq!(annotation, expected);
        assert!(imports.is_empty(), "{primitive:?}");
    }
}

#[test]
fn any_needs_an_import() {
    let mut f = Fixture::new();
    let any = f.primitive(Primitive::Any);

    assert_eq!(render(&f.graph, any), ("Any".to_string(), vec![Import::ANY]));
}

#[test]
fn collections() {
    let mut f = Fixture::new();
    let double = f.primitive(Primitive::Double);
    let string = f.primitive(Primitive::String);
    let map = f.map(double);
    let list = f.array(string);
    let nested = f.array(map);

    assert_eq!(render(&f.graph, map).0, "Dict[str, float]");
    assert_eq!(render(&f.graph, list).0, "List[str]");
    assert_eq!(render(&f.graph, nested).0, "List[Dict[str, float]]");
}

#[test]
fn array_of_datetime_registers_only_what_it_uses() {
    let mut f = Fixture::new();
    let stamp = f.graph.add(Type::TransformedString(StringTransform::DateTime));
    let stamps = f.array(stamp);

    let (annotation, imports) = render(&f.graph, stamps);

    assert_eq!(annotation, "List[datetime]");
    assert_eq!(imports, [Import::LIST, Import::DATETIME]);
}

#[test]
fn references_are_quoted_until_declared() {
    let mut f = Fixture::new();
    let person = f.class("Person");
    let people = f.array(person);
    let mut tracker = DeclarationTracker::new();
    let mut imports = ImportRegistry::new();
    let location = Location::type_root("Test");

    let rendered = |tracker: &DeclarationTracker, imports: &mut ImportRegistry| {
        TypeRenderer::new(&f.graph, tracker)
            .render(people, &location, imports)
            .unwrap()
    };

    assert_eq!(rendered(&tracker, &mut imports), "List['Person']");

    tracker.begin(person, "Person").unwrap();
    assert_eq!(rendered(&tracker, &mut imports), "List['Person']");

    tracker.finish(person);
    assert_eq!(rendered(&tracker, &mut imports), "List[Person]");
}

#[test]
fn enum_reference() {
    let mut f = Fixture::new();
    let color = f.enumeration("Color", &[("RED", "red")]);

    assert_eq!(render(&f.graph, color).0, "'Color'");
}

#[test]
fn nullable_union_is_optional() {
    let mut f = Fixture::new();
    let int = f.primitive(Primitive::Integer);
    let null = f.primitive(Primitive::Null);
    let int_first = f.union([int, null]);
    let null_first = f.union([null, int]);

    let (annotation, imports) = render(&f.graph, int_first);
    assert_eq!(annotation, "Optional[int]");
    assert_eq!(imports, [Import::OPTIONAL]);
    assert_eq!(render(&f.graph, null_first).0, "Optional[int]");
}

#[test]
fn general_union_order_is_stable() {
    let mut f = Fixture::new();
    let person = f.class("Person");
    let string = f.primitive(Primitive::String);
    let int = f.primitive(Primitive::Integer);
    let ints = f.array(int);
    let a = f.union([person, string, ints]);
    let b = f.union([ints, person, string]);

    let (annotation, imports) = render(&f.graph, a);
    assert_eq!(annotation, "Union[str, List[int], 'Person']");
    assert_eq!(imports, [Import::UNION, Import::LIST]);
    assert_eq!(render(&f.graph, b).0, annotation);
}

#[test]
fn union_with_null_and_more() {
    let mut f = Fixture::new();
    let string = f.primitive(Primitive::String);
    let null = f.primitive(Primitive::Null);
    let int = f.primitive(Primitive::Integer);
    let union = f.union([string, null, int]);

    assert_eq!(render(&f.graph, union).0, "Union[None, int, str]");
}

#[test]
fn member_order_ranks_kinds() {
    let mut f = Fixture::new();
    let any = f.primitive(Primitive::Any);
    let class = f.class("Zed");
    let color = f.enumeration("Alpha", &[]);
    let map = f.map(any);
    let string = f.primitive(Primitive::String);
    let stamp = f.graph.add(Type::TransformedString(StringTransform::DateTime));
    let bool_ = f.primitive(Primitive::Bool);

    let order = union_member_order(&f.graph, &[any, class, color, map, string, stamp, bool_]);

    assert_eq!(order, [bool_, string, stamp, map, color, class, any]);
}

#[test]
fn degenerate_unions() {
    let mut f = Fixture::new();
    let int = f.primitive(Primitive::Integer);
    let null = f.primitive(Primitive::Null);
    let single = f.union([int]);
    let only_null = f.union([null]);
    let empty = f.union([]);

    assert_eq!(render(&f.graph, single).0, "int");
    assert_eq!(render(&f.graph, only_null).0, "None");
    assert_eq!(
        render_err(&f.graph, empty, &Location::type_root("Test")),
        TypegenError::EmptyUnion {
            location: Location::type_root("Test")
        }
    );
}

#[test]
fn unsupported_transform_reports_location() {
    let mut f = Fixture::new();
    let uuid = f.graph.add(Type::TransformedString(StringTransform::Uuid));
    let ids = f.array(uuid);
    let location = Location::type_root("Person").property("ids");

    let err = render_err(&f.graph, ids, &location);

    assert_eq!(
        err.to_string(),
        "unsupported transformed string `uuid` at Person.ids[]"
    );
}

#[test]
fn unknown_type() {
    let mut f = Fixture::new();
    let missing = TypeId::from_raw(42);
    let values = f.map(missing);

    let err = render_err(&f.graph, values, &Location::type_root("Test"));

    assert_eq!(
        err,
        TypegenError::UnknownType {
            id: missing,
            location: Location::type_root("Test").value(),
        }
    );
}

#[test]
fn optional_properties() {
    let mut f = Fixture::new();
    let int = f.primitive(Primitive::Integer);
    let any = f.primitive(Primitive::Any);
    let nullable = f.nullable(int);
    let tracker = DeclarationTracker::new();
    let renderer = TypeRenderer::new(&f.graph, &tracker);
    let location = Location::type_root("Test");
    let mut imports = ImportRegistry::new();

    let mut property = |ty: TypeId, optional: bool| {
        let mut property = Property::new("p", ty);
        property.optional = optional;
        renderer
            .render_property(&property, &location, &mut imports)
            .unwrap()
    };

    assert_eq!(property(int, false), "int");
    assert_eq!(property(int, true), "Optional[int]");
    assert_eq!(property(nullable, true), "Optional[int]");
    assert_eq!(property(any, true), "Any");
}

#[test]
fn rendering_is_deterministic() {
    let (f, person) = Fixture::person();

    assert_eq!(render(&f.graph, person), render(&f.graph, person));
}

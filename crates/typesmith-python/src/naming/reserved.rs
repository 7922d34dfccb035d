/// Names generated code must not rebind.
///
/// Python keywords, the builtins the generated code calls, the names it
/// imports, every support combinator, the members generated on each class,
/// and the locals used inside generated methods (`self`, `obj`, `result`).
const FORBIDDEN: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
    // builtins used by generated code
    "bool", "dict", "float", "int", "isinstance", "list", "str", "staticmethod",
    "AssertionError", "Exception", "ValueError",
    // imports
    "Any", "Callable", "Dict", "List", "Optional", "Type", "TypeVar", "Union", "cast",
    "datetime", "dataclass", "Enum",
    // type variables
    "T", "EnumT",
    // combinators
    "from_none", "from_bool", "from_int", "from_float", "from_str", "from_list", "from_dict",
    "from_optional", "from_union", "from_datetime", "to_datetime", "to_enum", "to_class",
    // generated members
    "to_dict", "__init__",
    // method locals
    "self", "obj", "result",
];

/// Every name the naming framework must keep generated identifiers away from.
pub fn forbidden_names() -> &'static [&'static str] {
    FORBIDDEN
}

pub fn is_forbidden(name: &str) -> bool {
    FORBIDDEN.contains(&name)
}

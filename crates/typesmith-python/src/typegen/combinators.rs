//! Support combinators.
//!
//! Every converter in the generated module is built from these small
//! functions. Each one asserts the JSON shape it expects and signals a
//! mismatch with `AssertionError`; the only coercion is int to float in
//! `from_float`. Only the combinators a module actually uses are emitted, in
//! `Combinator::ALL` order.

use std::collections::BTreeSet;

use tracing::trace;

use super::imports::Import;

/// Fixed pattern shared by `from_datetime` and `to_datetime`.
pub const DATETIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S.%fZ";

/// A support function of the generated module.
///
/// The derived order is the emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Combinator {
    FromNone,
    FromBool,
    FromInt,
    FromFloat,
    FromStr,
    FromList,
    FromDict,
    FromOptional,
    FromUnion,
    FromDatetime,
    ToDatetime,
    ToEnum,
    ToClass,
}

/// Type variable a generic combinator is declared over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeVar {
    T,
    EnumT,
}

impl TypeVar {
    pub fn declaration(self) -> &'static str {
        match self {
            Self::T => r#"T = TypeVar("T")"#,
            Self::EnumT => r#"EnumT = TypeVar("EnumT", bound=Enum)"#,
        }
    }

    pub fn imports(self) -> &'static [Import] {
        match self {
            Self::T => &[Import::TYPE_VAR],
            Self::EnumT => &[Import::TYPE_VAR, Import::ENUM],
        }
    }
}

impl Combinator {
    pub const ALL: [Self; 13] = [
        Self::FromNone,
        Self::FromBool,
        Self::FromInt,
        Self::FromFloat,
        Self::FromStr,
        Self::FromList,
        Self::FromDict,
        Self::FromOptional,
        Self::FromUnion,
        Self::FromDatetime,
        Self::ToDatetime,
        Self::ToEnum,
        Self::ToClass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FromNone => "from_none",
            Self::FromBool => "from_bool",
            Self::FromInt => "from_int",
            Self::FromFloat => "from_float",
            Self::FromStr => "from_str",
            Self::FromList => "from_list",
            Self::FromDict => "from_dict",
            Self::FromOptional => "from_optional",
            Self::FromUnion => "from_union",
            Self::FromDatetime => "from_datetime",
            Self::ToDatetime => "to_datetime",
            Self::ToEnum => "to_enum",
            Self::ToClass => "to_class",
        }
    }

    /// Imports the body refers to, not counting its type variable.
    pub fn imports(self) -> &'static [Import] {
        match self {
            Self::FromNone | Self::FromBool | Self::FromInt | Self::FromFloat | Self::FromStr => {
                &[Import::ANY]
            }
            Self::FromList => &[Import::ANY, Import::CALLABLE, Import::LIST],
            Self::FromDict => &[Import::ANY, Import::CALLABLE, Import::DICT],
            Self::FromOptional => &[Import::ANY, Import::CALLABLE, Import::OPTIONAL],
            Self::FromUnion => &[Import::ANY, Import::CALLABLE, Import::LIST],
            Self::FromDatetime | Self::ToDatetime => &[Import::ANY, Import::DATETIME],
            Self::ToEnum => &[Import::ANY, Import::TYPE],
            Self::ToClass => &[Import::ANY, Import::TYPE, Import::CAST],
        }
    }

    pub fn type_var(self) -> Option<TypeVar> {
        match self {
            Self::FromList | Self::FromDict | Self::FromOptional | Self::ToClass => {
                Some(TypeVar::T)
            }
            Self::ToEnum => Some(TypeVar::EnumT),
            _ => None,
        }
    }

    /// Python source of the function.
    pub fn body(self) -> &'static str {
        match self {
            Self::FromNone => {
                "def from_none(x: Any) -> Any:\n    assert x is None\n    return x"
            }
            Self::FromBool => {
                "def from_bool(x: Any) -> bool:\n    assert isinstance(x, bool)\n    return x"
            }
            Self::FromInt => concat!(
                "def from_int(x: Any) -> int:\n",
                "    assert isinstance(x, int) and not isinstance(x, bool)\n",
                "    return x",
            ),
            Self::FromFloat => concat!(
                "def from_float(x: Any) -> float:\n",
                "    assert isinstance(x, (float, int)) and not isinstance(x, bool)\n",
                "    return float(x)",
            ),
            Self::FromStr => {
                "def from_str(x: Any) -> str:\n    assert isinstance(x, str)\n    return x"
            }
            Self::FromList => concat!(
                "def from_list(f: Callable[[Any], T], x: Any) -> List[T]:\n",
                "    assert isinstance(x, list)\n",
                "    return [f(y) for y in x]",
            ),
            Self::FromDict => concat!(
                "def from_dict(f: Callable[[Any], T], x: Any) -> Dict[str, T]:\n",
                "    assert isinstance(x, dict)\n",
                "    return {k: f(v) for (k, v) in x.items()}",
            ),
            Self::FromOptional => concat!(
                "def from_optional(f: Callable[[Any], T], x: Any) -> Optional[T]:\n",
                "    if x is None:\n",
                "        return None\n",
                "    return f(x)",
            ),
            Self::FromUnion => concat!(
                "def from_union(fs: List[Callable[[Any], Any]], x: Any) -> Any:\n",
                "    for f in fs:\n",
                "        try:\n",
                "            return f(x)\n",
                "        except Exception:\n",
                "            pass\n",
                "    raise AssertionError(\"no union member accepts the value\")",
            ),
            Self::FromDatetime => concat!(
                "def from_datetime(x: Any) -> datetime:\n",
                "    assert isinstance(x, str)\n",
                "    try:\n",
                "        return datetime.strptime(x, \"%Y-%m-%dT%H:%M:%S.%fZ\")\n",
                "    except ValueError as e:\n",
                "        raise AssertionError(str(e)) from e",
            ),
            Self::ToDatetime => concat!(
                "def to_datetime(x: Any) -> str:\n",
                "    assert isinstance(x, datetime)\n",
                "    return x.strftime(\"%Y-%m-%dT%H:%M:%S.%fZ\")",
            ),
            Self::ToEnum => concat!(
                "def to_enum(c: Type[EnumT], x: Any) -> Any:\n",
                "    assert isinstance(x, c)\n",
                "    return x.value",
            ),
            Self::ToClass => concat!(
                "def to_class(c: Type[T], x: Any) -> dict:\n",
                "    assert isinstance(x, c)\n",
                "    return cast(Any, x).to_dict()",
            ),
        }
    }
}

/// Append-only set of the combinators a module uses.
#[derive(Clone, Debug, Default)]
pub struct UsedCombinators {
    used: BTreeSet<Combinator>,
}

impl UsedCombinators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a use. Returns `false` if it was already recorded.
    pub fn mark(&mut self, combinator: Combinator) -> bool {
        let inserted = self.used.insert(combinator);
        if inserted {
            trace!(combinator = combinator.name(), "combinator used");
        }
        inserted
    }

    pub fn contains(&self, combinator: Combinator) -> bool {
        self.used.contains(&combinator)
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Used combinators in emission order.
    pub fn iter(&self) -> impl Iterator<Item = Combinator> + '_ {
        self.used.iter().copied()
    }

    /// Type variables needed by the used combinators, in declaration order.
    pub fn type_vars(&self) -> BTreeSet<TypeVar> {
        self.used.iter().filter_map(|c| c.type_var()).collect()
    }
}

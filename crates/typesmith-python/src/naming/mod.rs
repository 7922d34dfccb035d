//! Python identifiers from arbitrary text.
//!
//! `legalize` makes every character of a word valid inside a Python
//! identifier, `style` cases and joins the words. `make_name` does both.
//! Avoiding collisions between the resulting names is the job of the naming
//! framework driving this backend; `forbidden_names` lists what it must avoid.

mod legalize;
mod reserved;
mod style;


pub use legalize::{
    is_identifier_continue, is_identifier_start, is_legal_expansion, legalize_word, legalize_words,
};
pub use reserved::{forbidden_names, is_forbidden};
pub use style::{NameStyle, make_name, make_name_with, style_words};

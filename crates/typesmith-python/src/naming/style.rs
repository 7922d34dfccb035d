//! Casing policies for generated names.

use typesmith_core::utils::{WordStyle, combine_words};
use typesmith_core::words::{DefaultSplitter, Word, WordSplitter};

use super::legalize::{is_identifier_start, legalize_words};

/// Which kind of name is being made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// Classes and enums: `HttpServer`, acronyms kept (`HTTPServer`).
    TypeName,
    /// Object fields and functions: `first_name`.
    PropertyName,
    /// Enum cases: `IN_PROGRESS`.
    EnumCaseName,
}

impl NameStyle {
    fn fallback(self) -> &'static str {
        match self {
            Self::TypeName => "Empty",
            Self::PropertyName => "empty",
            Self::EnumCaseName => "EMPTY",
        }
    }
}

/// Case and join already legalized words.
///
/// The result is prefixed with `_` when its first character cannot start an
/// identifier, and falls back to `empty` (cased by the policy) when there are
/// no words.
pub fn style_words(words: &[Word], style: NameStyle) -> String {
    let name = match style {
        NameStyle::TypeName => {
            combine_words(words, WordStyle::Capitalized, Some(WordStyle::Upper), "")
        }
        NameStyle::PropertyName => combine_words(words, WordStyle::Lower, None, "_"),
        NameStyle::EnumCaseName => combine_words(words, WordStyle::Upper, None, "_"),
    };

    match name.chars().next() {
        None => style.fallback().to_string(),
        Some(first) if !is_identifier_start(first) => format!("_{name}"),
        Some(_) => name,
    }
}

/// Legalize and case `text` with the default word splitter.
///
/// # Examples
/// ```
/// use typesmith_python::{make_name, NameStyle};
/// assert_eq!(make_name("first name", NameStyle::TypeName), "FirstName");
/// assert_eq!(make_name("firstName", NameStyle::PropertyName), "first_name");
/// assert_eq!(make_name("in-progress", NameStyle::EnumCaseName), "IN_PROGRESS");
/// ```
pub fn make_name(text: &str, style: NameStyle) -> String {
    make_name_with(text, style, &DefaultSplitter)
}

/// Legalize and case `text` with a custom word splitter.
pub fn make_name_with(text: &str, style: NameStyle, splitter: &impl WordSplitter) -> String {
    style_words(&legalize_words(text, splitter), style)
}

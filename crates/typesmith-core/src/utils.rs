use crate::words::Word;

/// Casing applied to a single word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStyle {
    /// `word`
    Lower,
    /// `WORD`
    Upper,
    /// `Word`
    Capitalized,
}

/// Apply a casing to one word. Unicode-aware, so `über` becomes `Über`.
///
/// # Examples
/// ```
/// use typesmith_core::utils::{apply_word_style, WordStyle};
/// assert_eq!(apply_word_style("fOO", WordStyle::Capitalized), "Foo");
/// assert_eq!(apply_word_style("foo", WordStyle::Upper), "FOO");
/// ```
pub fn apply_word_style(word: &str, style: WordStyle) -> String {
    match style {
        WordStyle::Lower => word.to_lowercase(),
        WordStyle::Upper => word.to_uppercase(),
        WordStyle::Capitalized => {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let rest = chars.as_str().to_lowercase();
                    first.to_uppercase().chain(rest.chars()).collect()
                }
            }
        }
    }
}

/// Case every word and join them with `separator`.
///
/// Acronyms use `acronym_style` when given, so `HTTP` can survive PascalCase.
pub fn combine_words(
    words: &[Word],
    style: WordStyle,
    acronym_style: Option<WordStyle>,
    separator: &str,
) -> String {
    words
        .iter()
        .map(|word| {
            let style = match acronym_style {
                Some(acronym) if word.is_acronym => acronym,
                _ => style,
            };
            apply_word_style(&word.text, style)
        })
        .collect::<Vec<_>>()
        .join(separator)
}

//! Python identifier character classes.
//!
//! Python normalizes identifiers with NFKC, so a character is judged by what
//! it normalizes to. A character can start an identifier if it is `_` or a
//! letter (Lu, Ll, Lt, Lm, Lo) or letter number (Nl); it can continue one if
//! it can start one or is a mark (Mn, Mc), decimal digit (Nd) or connector
//! punctuation (Pc).

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

use typesmith_core::legalize::{Fallback, legalize_characters};
use typesmith_core::words::{Word, WordSplitter};

pub fn is_identifier_start(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::LetterNumber
        )
}

pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
        )
}

/// Whether a normalized expansion may appear in an identifier.
///
/// Its first character must pass the start test when `at_start` (the
/// continue test otherwise); every later character must pass the continue
/// test.
pub fn is_legal_expansion(expansion: &str, at_start: bool) -> bool {
    let mut chars = expansion.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let first_ok = if at_start {
        is_identifier_start(first)
    } else {
        is_identifier_continue(first)
    };
    first_ok && chars.all(is_identifier_continue)
}

/// Legalize one word: keep the NFKC form of legal characters, replace runs of
/// illegal ones with `_`, and trim `_` from the ends.
///
/// Characters are judged with the continue test, the first one included.
/// The start test is applied by `style_words`, which prefixes `_` when the
/// cased name cannot start with its first character.
pub fn legalize_word(word: &str) -> String {
    let legal = legalize_characters(
        word,
        |c| {
            let expansion: String = std::iter::once(c).nfkc().collect();
            is_legal_expansion(&expansion, false).then_some(expansion)
        },
        Fallback::Replace('_'),
    );
    legal.trim_matches('_').to_string()
}

/// Split `text` into words and legalize each, dropping words that end up
/// empty.
pub fn legalize_words(text: &str, splitter: &impl WordSplitter) -> Vec<Word> {
    splitter
        .split(text)
        .into_iter()
        .filter_map(|word| {
            let legal = legalize_word(&word.text);
            (!legal.is_empty()).then(|| Word {
                text: legal,
                is_acronym: word.is_acronym,
            })
        })
        .collect()
}

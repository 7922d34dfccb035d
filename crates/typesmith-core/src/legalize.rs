//! Generic character legalization.
//!
//! Backends decide which characters are legal (and what they normalize to);
//! this primitive decides what happens to the rest.

/// What to do with a character the backend rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Replace it. A run of rejected characters yields a single replacement.
    Replace(char),
    /// Remove it.
    Drop,
}

/// Rebuild `text` from the expansions `accept` returns, applying `fallback`
/// to every character it rejects with `None`.
///
/// # Examples
/// ```
/// use typesmith_core::legalize::{legalize_characters, Fallback};
/// let out = legalize_characters(
///     "a+-b",
///     |c| c.is_alphanumeric().then(|| c.to_string()),
///     Fallback::Replace('_'),
/// );
/// assert_eq!(out, "a_b");
/// ```
pub fn legalize_characters<F>(text: &str, mut accept: F, fallback: Fallback) -> String
where
    F: FnMut(char) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut replaced = false;

    for c in text.chars() {
        if let Some(legal) = accept(c) {
            out.push_str(&legal);
            replaced = false;
            continue;
        }
        match fallback {
            Fallback::Replace(r) if !replaced => {
                out.push(r);
                replaced = true;
            }
            Fallback::Replace(_) | Fallback::Drop => {}
        }
    }
    out
}

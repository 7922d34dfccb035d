//! Splitting arbitrary text into words.
//!
//! Word boundaries are separators (whitespace, control characters and ASCII
//! punctuation) and case transitions. Characters outside ASCII that are not
//! whitespace stay inside their word; backends legalize them later.

/// One word of a name, before casing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// All-uppercase word of more than one character, e.g. `HTTP`.
    pub is_acronym: bool,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_acronym = text.chars().count() > 1
            && text.chars().any(char::is_uppercase)
            && !text.chars().any(char::is_lowercase);
        Self { text, is_acronym }
    }
}

/// Word-splitting primitive used by name legalization.
pub trait WordSplitter {
    fn split(&self, text: &str) -> Vec<Word>;
}

/// The `split_into_words` splitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSplitter;

impl WordSplitter for DefaultSplitter {
    fn split(&self, text: &str) -> Vec<Word> {
        split_into_words(text)
    }
}

/// Split text on separators and case transitions.
///
/// `fooBar` and `foo_bar` give `foo`, `bar`. An uppercase run followed by a
/// lowercase letter ends one character early: `HTTPServer` gives `HTTP`,
/// `Server`. When every word is uppercase (`FOO_BAR`) none of them is treated
/// as an acronym.
///
/// # Examples
/// ```
/// use typesmith_core::words::split_into_words;
/// let words: Vec<_> = split_into_words("userID").into_iter().map(|w| w.text).collect();
/// assert_eq!(words, ["user", "ID"]);
/// ```
pub fn split_into_words(text: &str) -> Vec<Word> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            flush(&mut current, &mut words);
            continue;
        }
        // `current` is non-empty only if chars[i - 1] was pushed into it
        if !current.is_empty() && starts_new_word(&chars, i) {
            flush(&mut current, &mut words);
        }
        current.push(c);
    }
    flush(&mut current, &mut words);

    if words.iter().all(|w| w.is_acronym) {
        for word in &mut words {
            word.is_acronym = false;
        }
    }
    words
}

fn flush(current: &mut String, words: &mut Vec<Word>) {
    if !current.is_empty() {
        words.push(Word::new(std::mem::take(current)));
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_control() || (c.is_ascii() && !c.is_ascii_alphanumeric())
}

fn starts_new_word(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if !c.is_uppercase() {
        return false;
    }
    let prev = chars[i - 1];
    if prev.is_lowercase() || prev.is_numeric() {
        return true;
    }
    prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

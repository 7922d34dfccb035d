//! Configuration types for Python emission.

/// Which Python the generated module targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PythonVersion {
    /// Plain classes with a generated `__init__`.
    #[default]
    V3_6,
    /// `@dataclass` classes; the decorator provides `__init__`.
    V3_7,
}

impl PythonVersion {
    pub fn uses_dataclasses(self) -> bool {
        matches!(self, Self::V3_7)
    }
}

/// Configuration for Python emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Target Python version
    pub(crate) python_version: PythonVersion,
    /// Emit annotations only: no converters, no support code
    pub(crate) just_types: bool,
    /// Start the module with a comment showing how to call it
    pub(crate) usage_comment: bool,
    /// Custom header comment lines; replace the usage comment when present
    pub(crate) leading_comments: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python_version: PythonVersion::default(),
            just_types: false,
            usage_comment: true,
            leading_comments: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target Python version.
    pub fn python_version(mut self, value: PythonVersion) -> Self {
        self.python_version = value;
        self
    }

    /// Set whether to emit annotations only.
    pub fn just_types(mut self, value: bool) -> Self {
        self.just_types = value;
        self
    }

    /// Set whether to emit the usage comment.
    pub fn usage_comment(mut self, value: bool) -> Self {
        self.usage_comment = value;
        self
    }

    /// Set the header comment lines, without the `# ` prefix.
    pub fn leading_comments<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_comments = lines.into_iter().map(Into::into).collect();
        self
    }
}

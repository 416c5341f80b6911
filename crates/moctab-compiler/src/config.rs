//! Output options.

use serde::Deserialize;

/// Configuration for source rendering. The encoded table is not affected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit `//` comments next to header fields and section titles.
    pub(crate) comments: bool,
    /// Column at which the packed string literal is split.
    pub(crate) string_wrap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: true,
            string_wrap: 72,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit comments.
    pub fn comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    /// Set the string literal wrap column.
    pub fn string_wrap(mut self, value: usize) -> Self {
        self.string_wrap = value;
        self
    }

    /// Parse from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn has_comments(&self) -> bool {
        self.comments
    }

    pub fn wrap_column(&self) -> usize {
        self.string_wrap
    }
}

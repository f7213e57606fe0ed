//! Configuration options for env file output.
//!
//! ## Examples
//!
//! ```rust
//! use serde_envfile::EnvOptions;
//!
//! // Plain KEY = value lines
//! let options = EnvOptions::new();
//! assert!(!options.generate_comments);
//!
//! // Section headers and `# KEY = null` placeholders
//! let options = EnvOptions::commented();
//! assert!(options.generate_comments);
//!
//! // Double underscore between nested names
//! let options = EnvOptions::new().with_separator("__");
//! assert_eq!(options.separator, "__");
//! ```

/// Separator placed between the names of nested fields.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Configuration options for env file serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvOptions {
    /// Emit `# KEY = null` for absent leaves and a comment header before each
    /// nested group.
    pub generate_comments: bool,
    /// Joins ancestor field names into a key prefix.
    pub separator: String,
}

impl Default for EnvOptions {
    fn default() -> Self {
        EnvOptions {
            generate_comments: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl EnvOptions {
    /// Creates default options (no comments, `_` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with comment generation switched on.
    #[must_use]
    pub fn commented() -> Self {
        EnvOptions {
            generate_comments: true,
            ..Default::default()
        }
    }

    /// Turns comment generation on or off.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_envfile::EnvOptions;
    ///
    /// let options = EnvOptions::new().with_comments(true);
    /// assert_eq!(options, EnvOptions::commented());
    /// ```
    #[must_use]
    pub fn with_comments(mut self, generate_comments: bool) -> Self {
        self.generate_comments = generate_comments;
        self
    }

    /// Sets the string used to join nested field names.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Joins a parent prefix and a field name into a key.
    pub(crate) fn join_key(&self, prefix: Option<&str>, name: &str) -> String {
        match prefix {
            Some(prefix) => {
                let mut key =
                    String::with_capacity(prefix.len() + self.separator.len() + name.len());
                key.push_str(prefix);
                key.push_str(&self.separator);
                key.push_str(name);
                key
            }
            None => name.to_string(),
        }
    }
}

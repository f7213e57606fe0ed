//! Error types for env file serialization.
//!
//! ## Error Categories
//!
//! - **Recursive Types**: a structured type nests itself, directly or through
//!   other types. This is fatal to the whole write.
//! - **Unsupported Values**: a leaf field produced something that has no
//!   single-line text form (sequences, maps, structs, raw bytes)
//! - **I/O Errors**: the sink or destination file failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_envfile::Error;
//!
//! let err = Error::recursive_type("app::Node");
//! assert!(err.to_string().contains("app::Node"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while writing an env file.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A type was reached while it was already being flattened further up the path
    #[error("Recursive type detected: `{type_name}` is already being written higher up the key path")]
    RecursiveType { type_name: &'static str },

    /// A leaf value that cannot be rendered as a single text value
    #[error("Unsupported value for key `{key}`: {kind} cannot be written as a scalar")]
    UnsupportedValue { key: String, kind: String },

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the structural-recursion error for the offending type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_envfile::Error;
    ///
    /// let err = Error::recursive_type("Node");
    /// assert!(matches!(err, Error::RecursiveType { type_name: "Node" }));
    /// ```
    pub fn recursive_type(type_name: &'static str) -> Self {
        Error::RecursiveType { type_name }
    }

    /// Creates an unsupported value error. The key is filled in by the writer
    /// once it knows which field produced the value.
    pub fn unsupported_value(kind: &str) -> Self {
        Error::UnsupportedValue {
            key: String::new(),
            kind: kind.to_string(),
        }
    }

    /// Attaches the flattened key to errors raised while converting a leaf.
    pub(crate) fn at_key(self, key: &str) -> Self {
        match self {
            Error::UnsupportedValue { kind, .. } => Error::UnsupportedValue {
                key: key.to_string(),
                kind,
            },
            other => other,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_envfile::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink or file failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

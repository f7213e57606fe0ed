//! # serde_envfile
//!
//! Flattens nested configuration structs into `KEY = value` environment files.
//!
//! ## What does it write?
//!
//! Every scalar field becomes one line. Fields of nested structs are prefixed
//! with the names of the fields that lead to them, joined by `_`:
//!
//! ```text
//! Name = svc
//! Db_Host = x
//! ```
//!
//! With comments enabled, absent values are kept as `# Db_Port = null`
//! placeholders and every nested group gets a small header block, which makes
//! the output usable as a documented `.env` template.
//!
//! ## Key Features
//!
//! - **Declared-type driven**: the field table of a type decides what is
//!   written, so absent nested structs still show their full key layout
//! - **Rename and ignore**: per-field key overrides and exclusions
//! - **Recursion guard**: a type nesting itself, directly or indirectly, is
//!   reported as [`Error::RecursiveType`] instead of recursing forever
//! - **Serde scalars**: leaf values are rendered through serde, so newtypes,
//!   unit enums and `chrono` timestamps work out of the box
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_envfile::{to_string, to_string_with_options, EnvOptions, EnvStruct, Field};
//!
//! struct Db {
//!     host: String,
//!     port: Option<u16>,
//! }
//!
//! impl EnvStruct for Db {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::leaf("Host", |db: &Db| &db.host),
//!             Field::leaf("Port", |db: &Db| &db.port),
//!         ]
//!     }
//! }
//!
//! struct Root {
//!     name: String,
//!     db: Db,
//! }
//!
//! impl EnvStruct for Root {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::leaf("Name", |root: &Root| &root.name),
//!             Field::nested("Db", |root: &Root| Some(&root.db)),
//!         ]
//!     }
//! }
//!
//! let root = Root {
//!     name: "svc".to_string(),
//!     db: Db { host: "x".to_string(), port: None },
//! };
//!
//! assert_eq!(to_string(&root).unwrap(), "Name = svc\nDb_Host = x\n");
//!
//! let commented = to_string_with_options(&root, EnvOptions::commented()).unwrap();
//! assert!(commented.contains("# Db\n"));
//! assert!(commented.ends_with("Db_Host = x\n# Db_Port = null\n"));
//! ```
//!
//! ## Limitations
//!
//! - Writer only; there is no parser for the produced files
//! - Collections, maps and structs cannot be leaf values
//! - Values are written verbatim: a value containing `=` or a newline is not
//!   quoted or escaped
//! - Recursion is detected per declared type, so the same instance reachable
//!   through two different fields is written twice

pub mod error;
pub mod field;
pub mod macros;
pub mod options;
mod path;
pub mod scalar;
mod ser;

pub use error::{Error, Result};
pub use field::{EnvStruct, Field};
pub use options::{EnvOptions, DEFAULT_SEPARATOR};
pub use scalar::ScalarSerializer;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug_span;

/// Serialize any `T: EnvStruct` to an env file string.
///
/// # Errors
///
/// Returns an error if a type nests itself or a leaf value has no text form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: EnvStruct>(value: &T) -> Result<String> {
    to_string_with_options(value, EnvOptions::default())
}

/// Serialize any `T: EnvStruct` to an env file string with custom options.
///
/// # Errors
///
/// Returns an error if a type nests itself or a leaf value has no text form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T: EnvStruct>(value: &T, options: EnvOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, value, options)?;
    String::from_utf8(buffer).map_err(|e| Error::custom(e.to_string()))
}

/// Serialize any `T: EnvStruct` to a writer.
///
/// Lines are written as they are produced; if the write fails part way, the
/// lines already written stay in the writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: EnvStruct,
{
    to_writer_with_options(writer, value, EnvOptions::default())
}

/// Serialize any `T: EnvStruct` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EnvOptions) -> Result<()>
where
    W: io::Write,
    T: EnvStruct,
{
    let _span = debug_span!(
        "write_env",
        root = std::any::type_name::<T>(),
        comments = options.generate_comments
    )
    .entered();
    ser::flatten(&mut writer, Some(value), &options)
}

/// Write an env file for `value` at `path`, creating or truncating it.
///
/// The file is flushed on success and closed on every return path.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if
/// serialization fails. A failed write may leave a partial file behind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P, T>(path: P, value: &T, generate_comments: bool) -> Result<()>
where
    P: AsRef<Path>,
    T: EnvStruct,
{
    to_file_with_options(
        path,
        value,
        EnvOptions::new().with_comments(generate_comments),
    )
}

/// Write an env file for `value` at `path` with custom options.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if
/// serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file_with_options<P, T>(path: P, value: &T, options: EnvOptions) -> Result<()>
where
    P: AsRef<Path>,
    T: EnvStruct,
{
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(&format!("cannot create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    to_writer_with_options(&mut writer, value, options)?;
    writer.flush().map_err(|e| Error::io(&e.to_string()))
}

/// Write the key layout of `T` without a value.
///
/// Every leaf is absent, so with comments enabled this produces a fully
/// commented skeleton (`# KEY = null` lines plus section headers); without
/// comments it produces an empty string.
///
/// # Errors
///
/// Returns an error if a type nests itself.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn template_string<T: EnvStruct>(options: EnvOptions) -> Result<String> {
    let mut buffer = Vec::new();
    template_writer::<_, T>(&mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| Error::custom(e.to_string()))
}

/// Write the key layout of `T` without a value to a writer.
///
/// # Errors
///
/// Returns an error if a type nests itself or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn template_writer<W, T>(mut writer: W, options: EnvOptions) -> Result<()>
where
    W: io::Write,
    T: EnvStruct,
{
    let _span = debug_span!("write_env_template", root = std::any::type_name::<T>()).entered();
    ser::flatten::<T>(&mut writer, None, &options)
}

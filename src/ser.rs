//! Env file serialization.
//!
//! This module holds the flattening writer that turns an [`EnvStruct`] into
//! `KEY = value` lines.
//!
//! ## Output
//!
//! For each structured value, in order:
//!
//! 1. one line per non-ignored leaf field, in declaration order:
//!    `KEY = value` when present, `# KEY = null` when absent and comments are on
//! 2. each nested group, in declaration order, preceded by a header block when
//!    comments are on:
//!
//! ```text
//!
//! #
//! # Db
//! #
//! ```
//!
//! Nested keys are the ancestor names joined with the separator (`Db_Host`).
//! Leaves always come before nested groups at the same level, however the
//! fields are interleaved in the declaration.
//!
//! Values are written as-is: no quoting or escaping.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_envfile::{to_string, EnvStruct, Field};
//!
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl EnvStruct for Server {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::leaf("Host", |s: &Server| &s.host),
//!             Field::leaf("Port", |s: &Server| &s.port),
//!         ]
//!     }
//! }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(to_string(&server).unwrap(), "Host = localhost\nPort = 8080\n");
//! ```

use crate::path::VisitPath;
use crate::{EnvOptions, EnvStruct, Error, Field, Result};
use std::fmt;
use std::io;
use tracing::trace;

/// Walks structured values and writes their flattened lines into a sink.
pub(crate) struct Flattener<'w> {
    sink: &'w mut dyn io::Write,
    options: &'w EnvOptions,
}

impl<'w> Flattener<'w> {
    pub(crate) fn new(sink: &'w mut dyn io::Write, options: &'w EnvOptions) -> Self {
        Flattener { sink, options }
    }

    /// Writes every field of `instance`, recursing into nested groups.
    ///
    /// `instance` is `None` when a parent's composite field was absent; all
    /// leaves below are then written as null.
    pub(crate) fn write_struct<T: EnvStruct>(
        &mut self,
        instance: Option<&T>,
        prefix: Option<&str>,
        parent: Option<&VisitPath<'_>>,
    ) -> Result<()> {
        let path = VisitPath::extend::<T>(parent)?;
        trace!(
            type_name = path.type_name(),
            depth = path.depth(),
            prefix,
            present = instance.is_some(),
            "flattening struct"
        );

        let fields = T::fields();
        let mut nested: Vec<(String, &Field<T>)> = Vec::new();

        for field in fields.iter().filter(|field| !field.is_ignored()) {
            let key = self.options.join_key(prefix, field.effective_name());

            if !field.is_leaf() {
                nested.push((key, field));
                continue;
            }

            match field.read_leaf(instance).map_err(|e| e.at_key(&key))? {
                Some(value) => self.line(format_args!("{} = {}", key, value))?,
                None if self.options.generate_comments => {
                    self.line(format_args!("# {} = null", key))?
                }
                None => {}
            }
        }

        for (key, field) in nested {
            if self.options.generate_comments {
                self.write_header(&key)?;
            }
            field.write_nested(instance, self, &key, &path)?;
        }

        Ok(())
    }

    fn write_header(&mut self, key: &str) -> Result<()> {
        self.line(format_args!(""))?;
        self.line(format_args!("#"))?;
        self.line(format_args!("# {}", key))?;
        self.line(format_args!("#"))
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.sink, "{}", args).map_err(|e| Error::io(&e.to_string()))
    }
}

/// Flattens `instance` (or just the layout of `T`, if absent) into `sink`.
pub(crate) fn flatten<T: EnvStruct>(
    sink: &mut dyn io::Write,
    instance: Option<&T>,
    options: &EnvOptions,
) -> Result<()> {
    let mut flattener = Flattener::new(sink, options);
    flattener.write_struct(instance, None, None)
}

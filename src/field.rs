//! Field descriptors for structured types.
//!
//! A type opts into env file output by implementing [`EnvStruct`], which lists
//! its fields in declaration order. Each [`Field`] is classified once, when it
//! is built:
//!
//! - [`Field::leaf`] for scalars, text and `Option`s of those. The accessor
//!   returns a reference to anything `Serialize`; it is rendered through
//!   [`ScalarSerializer`](crate::ScalarSerializer).
//! - [`Field::nested`] for another [`EnvStruct`]. The accessor returns
//!   `Option<&U>`, which covers plain, optional and boxed children alike.
//!
//! Either kind can be renamed with [`Field::rename`] or dropped with
//! [`Field::ignore`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_envfile::{EnvStruct, Field};
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
//!     password: String,
//!     db: Db,
//! }
//!
//! impl EnvStruct for Root {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::leaf("name", |root: &Root| &root.name).rename("Name"),
//!             Field::leaf("Password", |root: &Root| &root.password).ignore(),
//!             Field::nested("Db", |root: &Root| Some(&root.db)),
//!         ]
//!     }
//! }
//! ```

use crate::path::VisitPath;
use crate::ser::Flattener;
use crate::{scalar, Result};
use serde::Serialize;
use std::fmt;

/// A structured type whose fields can be flattened into env file keys.
pub trait EnvStruct: Sized + 'static {
    /// The field descriptors of this type, in declaration order.
    fn fields() -> Vec<Field<Self>>;
}

type LeafReader<T> = Box<dyn Fn(&T) -> Result<Option<String>>>;
type NestedWriter<T> =
    Box<dyn Fn(Option<&T>, &mut Flattener<'_>, &str, &VisitPath<'_>) -> Result<()>>;

/// How a field is written, fixed when the descriptor is built.
pub(crate) enum FieldKind<T> {
    Leaf(LeafReader<T>),
    Composite(NestedWriter<T>),
}

/// A named member of an [`EnvStruct`].
pub struct Field<T> {
    name: &'static str,
    rename: Option<&'static str>,
    ignored: bool,
    kind: FieldKind<T>,
}

impl<T: 'static> Field<T> {
    /// Describes a scalar field. Absent values (`None`, `()`) are treated as null.
    pub fn leaf<V>(name: &'static str, get: fn(&T) -> &V) -> Self
    where
        V: ?Sized + Serialize + 'static,
    {
        Field {
            name,
            rename: None,
            ignored: false,
            kind: FieldKind::Leaf(Box::new(move |instance: &T| scalar::to_scalar(get(instance)))),
        }
    }

    /// Describes a field holding another structured type.
    ///
    /// The accessor returns `None` when the child is absent; every leaf below
    /// it is then treated as null.
    pub fn nested<U: EnvStruct>(name: &'static str, get: fn(&T) -> Option<&U>) -> Self {
        Field {
            name,
            rename: None,
            ignored: false,
            kind: FieldKind::Composite(Box::new(
                move |parent: Option<&T>,
                      flattener: &mut Flattener<'_>,
                      prefix: &str,
                      path: &VisitPath<'_>| {
                    flattener.write_struct::<U>(parent.and_then(get), Some(prefix), Some(path))
                },
            )),
        }
    }
}

impl<T> Field<T> {
    /// Writes this field under `name` instead of its own name.
    #[must_use]
    pub fn rename(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }

    /// Excludes this field from output entirely, including anything nested below it.
    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// The field's own name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The name used in keys: the override if one is set.
    pub fn effective_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// True for scalar fields, false for nested structs.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, FieldKind::Leaf(_))
    }

    /// Reads and renders a leaf. An absent instance reads as null.
    pub(crate) fn read_leaf(&self, instance: Option<&T>) -> Result<Option<String>> {
        match (&self.kind, instance) {
            (FieldKind::Leaf(read), Some(instance)) => read(instance),
            _ => Ok(None),
        }
    }

    /// Recurses into a composite field's child.
    pub(crate) fn write_nested(
        &self,
        parent: Option<&T>,
        flattener: &mut Flattener<'_>,
        prefix: &str,
        path: &VisitPath<'_>,
    ) -> Result<()> {
        match &self.kind {
            FieldKind::Composite(write) => write(parent, flattener, prefix, path),
            FieldKind::Leaf(_) => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rename", &self.rename)
            .field("ignored", &self.ignored)
            .field("leaf", &self.is_leaf())
            .finish()
    }
}

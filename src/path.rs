//! The chain of types currently being flattened.
//!
//! Each recursive step borrows its parent's frame and adds one of its own on the
//! stack, so the path unwinds by itself as calls return. A type may appear in
//! the chain at most once.

use crate::{Error, Result};
use std::any::{self, TypeId};
use tracing::debug;

/// One frame of the active visitation path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VisitPath<'a> {
    type_id: TypeId,
    type_name: &'static str,
    parent: Option<&'a VisitPath<'a>>,
}

impl<'a> VisitPath<'a> {
    /// Extends `parent` with `T`, failing if `T` is already on the path.
    pub(crate) fn extend<T: 'static>(parent: Option<&'a VisitPath<'a>>) -> Result<Self> {
        let type_id = TypeId::of::<T>();
        let type_name = any::type_name::<T>();

        if parent.is_some_and(|parent| parent.contains(type_id)) {
            debug!(type_name, "rejecting recursive type");
            return Err(Error::recursive_type(type_name));
        }

        Ok(VisitPath {
            type_id,
            type_name,
            parent,
        })
    }

    pub(crate) fn contains(&self, type_id: TypeId) -> bool {
        self.frames().any(|frame| frame.type_id == type_id)
    }

    /// Number of types on the path, this one included.
    pub(crate) fn depth(&self) -> usize {
        self.frames().count()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn frames(&self) -> impl Iterator<Item = &VisitPath<'a>> {
        std::iter::successors(Some(self), |frame| frame.parent)
    }
}

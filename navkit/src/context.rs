//! Implicit context propagation along the render tree.
//!
//! A [`Scope`] is handed down by reference through every render call. A
//! container that wants to share state with its descendants calls
//! [`Scope::provide`], which returns a child scope borrowing the parent, and
//! renders its children with that child. Any descendant, however deep, can
//! then [`consume`](Scope::consume) the value by type.
//!
//! Lookups walk towards the root and return the innermost value of the
//! requested type, so a nested provider shadows an outer one for its own
//! subtree only. Because each child scope borrows its parent, a value can
//! never outlive the render pass that published it, and two trees rendered
//! from different roots cannot observe each other.
//!
//! # Example
//!
//! ```
//! use navkit::Scope;
//!
//! #[derive(Debug, PartialEq)]
//! struct Theme(&'static str);
//!
//! let root = Scope::root();
//! let outer = root.provide(Theme("dark"));
//! let inner = outer.provide(Theme("light"));
//!
//! assert_eq!(inner.consume::<Theme>(), Some(&Theme("light")));
//! assert_eq!(outer.consume::<Theme>(), Some(&Theme("dark")));
//! assert_eq!(root.consume::<Theme>(), None);
//! ```

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// A single published value.
struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl Entry {
    fn new<T: Any>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    fn downcast<T: Any>(&self) -> Option<&T> {
        if self.type_id == TypeId::of::<T>() {
            self.value.downcast_ref::<T>()
        } else {
            None
        }
    }
}

/// A node in the chain of published values for one render pass.
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    entry: Option<Entry>,
}

impl Scope<'static> {
    /// Create an empty root scope.
    pub fn root() -> Self {
        Self {
            parent: None,
            entry: None,
        }
    }
}

impl Default for Scope<'static> {
    fn default() -> Self {
        Self::root()
    }
}

impl<'a> Scope<'a> {
    /// Publish a value for everything rendered with the returned scope.
    pub fn provide<T: Any>(&self, value: T) -> Scope<'_> {
        log::trace!("scope depth {}: providing {}", self.depth() + 1, type_name::<T>());
        Scope {
            parent: Some(self),
            entry: Some(Entry::new(value)),
        }
    }

    /// Read the innermost value of type `T`, if any ancestor provided one.
    pub fn consume<T: Any>(&self) -> Option<&T> {
        let mut current = self;
        loop {
            if let Some(value) = current.entry.as_ref().and_then(Entry::downcast::<T>) {
                return Some(value);
            }
            match current.parent {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }

    /// Read the innermost value of type `T`, or `fallback` if none exists.
    pub fn consume_or<'s, T: Any>(&'s self, fallback: &'s T) -> &'s T {
        self.consume::<T>().unwrap_or(fallback)
    }

    /// Check whether a value of type `T` is visible from this scope.
    pub fn has<T: Any>(&self) -> bool {
        self.consume::<T>().is_some()
    }

    /// Number of providers between this scope and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = current.parent {
            depth += 1;
            current = parent;
        }
        depth
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(entry) = &scope.entry {
                names.push(entry.type_name);
            }
            current = scope.parent;
        }
        f.debug_struct("Scope").field("provided", &names).finish()
    }
}

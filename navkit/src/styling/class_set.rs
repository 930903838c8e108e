use super::{StyleVariant, registry};
use crate::error::Result;

/// Build a namespaced class name: `prefix("navbar", "toggle") == "navbar-toggle"`.
pub fn prefix(base_class: &str, suffix: &str) -> String {
    format!("{base_class}-{suffix}")
}

/// Ordered mapping of class name to on/off.
///
/// Keys are unique; inserting an existing key updates its value in place.
/// A class set is derived from the current properties on every render and is
/// never cached across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    entries: Vec<(String, bool)>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a class.
    pub fn insert(&mut self, class: impl Into<String>, on: bool) {
        let class = class.into();
        match self.entries.iter_mut().find(|(name, _)| *name == class) {
            Some(entry) => entry.1 = on,
            None => self.entries.push((class, on)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, class: impl Into<String>, on: bool) -> Self {
        self.insert(class, on);
        self
    }

    /// Value for a class, `None` if the key is absent.
    pub fn get(&self, class: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(name, _)| name == class)
            .map(|(_, on)| *on)
    }

    pub fn contains_key(&self, class: &str) -> bool {
        self.get(class).is_some()
    }

    /// Check that a class is present and switched on.
    pub fn is_on(&self, class: &str) -> bool {
        self.get(class).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, on)| (name.as_str(), *on))
    }

    /// Classes that are switched on, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, on)| *on).map(|(name, _)| name)
    }

    /// Space-separated list of enabled classes.
    pub fn to_class_string(&self) -> String {
        self.enabled().collect::<Vec<_>>().join(" ")
    }
}

/// Compute the class set for a component.
///
/// Always contains `base_class` and `"<base_class>-<variant>"` switched on,
/// plus one `"<base_class>-<flag>"` entry per extra flag with its value
/// copied verbatim (false flags are kept as keys).
pub fn compute_class_set<'a, I>(base_class: &str, variant: &StyleVariant, extra: I) -> ClassSet
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut set = ClassSet::new()
        .with(base_class, true)
        .with(prefix(base_class, variant.as_str()), true);
    for (flag, on) in extra {
        set.insert(prefix(base_class, flag), on);
    }
    set
}

/// The Bootstrap-style properties every styled component carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BsProps {
    /// Base class, e.g. `"navbar"`.
    pub bs_class: String,
    /// Requested variant; `None` selects the registered default.
    pub bs_style: Option<StyleVariant>,
}

impl BsProps {
    pub fn new(bs_class: impl Into<String>) -> Self {
        Self {
            bs_class: bs_class.into(),
            bs_style: None,
        }
    }

    pub fn style(mut self, style: Option<StyleVariant>) -> Self {
        self.bs_style = style;
        self
    }

    /// `"<bs_class>-<suffix>"`.
    pub fn prefix(&self, suffix: &str) -> String {
        prefix(&self.bs_class, suffix)
    }

    /// Resolve the variant through the global registry and compute the class set.
    pub fn class_set<'a, I>(&self, extra: I) -> Result<ClassSet>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let variant = registry::resolve(&self.bs_class, self.bs_style.as_ref())?;
        Ok(compute_class_set(&self.bs_class, &variant, extra))
    }
}

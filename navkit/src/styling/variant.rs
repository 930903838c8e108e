use std::borrow::Cow;
use std::fmt;

/// A named visual variant of a component family, e.g. `inverse` for `navbar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleVariant(Cow<'static, str>);

impl StyleVariant {
    pub const DEFAULT: Self = Self(Cow::Borrowed("default"));
    pub const INVERSE: Self = Self(Cow::Borrowed("inverse"));
    pub const PRIMARY: Self = Self(Cow::Borrowed("primary"));
    pub const SUCCESS: Self = Self(Cow::Borrowed("success"));
    pub const INFO: Self = Self(Cow::Borrowed("info"));
    pub const WARNING: Self = Self(Cow::Borrowed("warning"));
    pub const DANGER: Self = Self(Cow::Borrowed("danger"));
    pub const LINK: Self = Self(Cow::Borrowed("link"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for StyleVariant {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for StyleVariant {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

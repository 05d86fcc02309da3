use std::fmt;

/// Installable package specifier produced for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpec {
    /// Direct download URL, passed to the installer verbatim
    Url(String),
    /// Exact version pin, rendered as `name==version`
    Pinned { name: String, version: String },
    /// Bare package name, any version
    Name(String),
}

impl PackageSpec {
    /// Build a specifier from already trimmed fields.
    ///
    /// A non-empty `url` wins over `name`/`version`, which are then ignored.
    /// A `version` without a `name` is meaningless and yields `None`, as does
    /// an entry with neither `url` nor `name`.
    pub fn from_fields(url: &str, name: &str, version: &str) -> Option<Self> {
        if !url.is_empty() {
            Some(Self::Url(url.to_string()))
        } else if !name.is_empty() && !version.is_empty() {
            Some(Self::Pinned {
                name: name.to_string(),
                version: version.to_string(),
            })
        } else if !name.is_empty() {
            Some(Self::Name(name.to_string()))
        } else {
            None
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Pinned { name, version } => write!(f, "{}=={}", name, version),
            Self::Name(name) => f.write_str(name),
        }
    }
}

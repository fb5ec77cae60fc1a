use serde::{Deserialize, Serialize};
use std::fmt;

/// A request's resource type, optionally carrying a `/`-separated version
/// suffix (e.g. `com.example.list/1.0.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into `(base, version)`. The version is present iff the raw
    /// string contains exactly one `/`; with two or more slashes the whole
    /// string is treated as a literal type and no split happens.
    pub fn split_version(&self) -> (&str, Option<&str>) {
        let mut slashes = self.0.match_indices('/');
        match (slashes.next(), slashes.next()) {
            (Some((idx, _)), None) => (&self.0[..idx], Some(&self.0[idx + 1..])),
            _ => (&self.0, None),
        }
    }

    /// The prefix shared by every script candidate: `base/` or
    /// `base/version/`.
    pub fn type_segment(&self) -> String {
        match self.split_version() {
            (base, Some(version)) => format!("{base}/{version}/"),
            (base, None) => format!("{base}/"),
        }
    }

    /// The resource type's simple name: the last dot-delimited segment of
    /// the base type's final path segment, e.g. `com.example.list` ->
    /// `list`, `app/components/list` -> `list`.
    pub fn simple_name(&self) -> &str {
        let (base, _) = self.split_version();
        let tail = base.rsplit('/').next().unwrap_or(base);
        tail.rsplit('.').next().unwrap_or(tail)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_slash_has_no_version() {
        let rt = ResourceType::from("com.example.list");
        assert_eq!(rt.split_version(), ("com.example.list", None));
        assert_eq!(rt.type_segment(), "com.example.list/");
        assert_eq!(rt.simple_name(), "list");
    }

    #[test]
    fn test_single_slash_splits_version() {
        let rt = ResourceType::from("com.example.list/1.0.0");
        assert_eq!(rt.split_version(), ("com.example.list", Some("1.0.0")));
        assert_eq!(rt.type_segment(), "com.example.list/1.0.0/");
        assert_eq!(rt.simple_name(), "list");
    }

    #[test]
    fn test_multiple_slashes_stay_literal() {
        let rt = ResourceType::from("app/components/list");
        assert_eq!(rt.split_version(), ("app/components/list", None));
        assert_eq!(rt.type_segment(), "app/components/list/");
        assert_eq!(rt.simple_name(), "list");
    }

    #[test]
    fn test_simple_name_without_dots() {
        let rt = ResourceType::from("app");
        assert_eq!(rt.simple_name(), "app");
    }
}

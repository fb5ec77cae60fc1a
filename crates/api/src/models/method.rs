use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// HTTP request method, stored as the uppercase verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Method(Cow<'static, str>);

impl Method {
    pub const GET: Method = Method(Cow::Borrowed("GET"));
    pub const HEAD: Method = Method(Cow::Borrowed("HEAD"));
    pub const POST: Method = Method(Cow::Borrowed("POST"));
    pub const PUT: Method = Method(Cow::Borrowed("PUT"));
    pub const DELETE: Method = Method(Cow::Borrowed("DELETE"));
    pub const PATCH: Method = Method(Cow::Borrowed("PATCH"));
    pub const OPTIONS: Method = Method(Cow::Borrowed("OPTIONS"));

    pub fn new(verb: impl Into<Cow<'static, str>>) -> Self {
        Self(verb.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        Self::new(s.to_uppercase())
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Self::new(s.to_uppercase())
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

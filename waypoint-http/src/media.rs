use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A typed media type, e.g. `application/json`.
///
/// Route descriptors accept either these values or raw strings; both end up
/// as the string form returned by [`MediaType::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MediaType(Cow<'static, str>);

impl MediaType {
    pub const JSON: MediaType = MediaType::from_static("application/json");
    pub const HTML: MediaType = MediaType::from_static("text/html");
    pub const TEXT: MediaType = MediaType::from_static("text/plain");
    pub const XML: MediaType = MediaType::from_static("application/xml");
    pub const FORM_URLENCODED: MediaType =
        MediaType::from_static("application/x-www-form-urlencoded");
    pub const OCTET_STREAM: MediaType = MediaType::from_static("application/octet-stream");

    pub const fn from_static(media_type: &'static str) -> Self {
        MediaType(Cow::Borrowed(media_type))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        MediaType(Cow::Owned(s.to_string()))
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        MediaType(Cow::Owned(s))
    }
}

impl From<&MediaType> for MediaType {
    fn from(m: &MediaType) -> Self {
        m.clone()
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use crate::core::encoding::decode_path_element;
use crate::utils::error::{Result, UriError};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Character separating path elements. It is always percent-encoded when it
/// appears inside an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PathSeparator {
    Slash,
    Colon,
}

impl PathSeparator {
    pub fn as_char(self) -> char {
        match self {
            PathSeparator::Slash => '/',
            PathSeparator::Colon => ':',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UriKind {
    /// `scheme://server/path`
    Url,
    /// `/path`
    AbsolutePath,
    /// `path`
    RelativePath,
    /// `urn:nid:nss`
    Urn,
}

impl UriKind {
    pub fn separator(self) -> PathSeparator {
        match self {
            UriKind::Urn => PathSeparator::Colon,
            _ => PathSeparator::Slash,
        }
    }

    pub fn is_absolute(self) -> bool {
        matches!(self, UriKind::Url | UriKind::Urn)
    }
}

/// A fully encoded URI reference produced by one of the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uri {
    kind: UriKind,
    #[serde(rename = "uri")]
    value: String,
    #[serde(skip)]
    path_offset: usize,
}

impl Uri {
    pub(crate) fn new(kind: UriKind, value: String, path_offset: usize) -> Self {
        debug_assert!(path_offset <= value.len());
        Self {
            kind,
            value,
            path_offset,
        }
    }

    pub fn kind(&self) -> UriKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// The encoded path (URL) or namespace specific string (URN), without a
    /// leading separator.
    pub fn encoded_path(&self) -> &str {
        &self.value[self.path_offset..]
    }

    /// Splits the encoded path and decodes every element back to its raw form.
    pub fn path_elements(&self) -> Result<Vec<String>> {
        let path = self.encoded_path();
        if path.is_empty() {
            return Ok(Vec::new());
        }
        path.split(self.kind.separator().as_char())
            .map(decode_path_element)
            .collect()
    }

    /// Parses the URI with the WHATWG URL parser. Elements that are exactly
    /// `.` or `..` are valid pchars and stay in [`Uri::as_str`], but the
    /// parser removes them as dot segments (`%2E` included), so the returned
    /// path may be shorter than [`Uri::path_elements`].
    pub fn to_url(&self) -> Result<Url> {
        if !self.kind.is_absolute() {
            return Err(UriError::NotAbsolute {
                value: self.value.clone(),
            });
        }
        Ok(Url::parse(&self.value)?)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<Uri> for Url {
    type Error = UriError;

    fn try_from(uri: Uri) -> Result<Self> {
        uri.to_url()
    }
}

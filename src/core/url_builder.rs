//! Staged URL builder.
//!
//! Each stage is an immutable value and every method returns a new stage, so a
//! partly built URL can serve as a prefix for several others:
//!
//! ```
//! use uri_encoding::UriBuilder;
//!
//! let customer = UriBuilder::create_url()
//!     .scheme("https")
//!     .server("servername")
//!     .path_elements(["rest", "customers", "2024/1234"]);
//!
//! let shipping = customer.path_elements(["addresses", "shipping"]).build().unwrap();
//! assert_eq!(
//!     shipping.as_str(),
//!     "https://servername/rest/customers/2024%2F1234/addresses/shipping"
//! );
//! ```

use crate::core::encoding::combine_path_elements;
use crate::domain::model::{PathSeparator, Uri, UriKind};
use crate::domain::ports::BuildUri;
use crate::utils::error::{Result, UriError};
use crate::utils::validation::{validate_scheme, validate_server};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct UrlBuilder;

impl UrlBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn scheme(&self, scheme: impl Into<String>) -> UrlBuilderWithScheme {
        UrlBuilderWithScheme {
            scheme: scheme.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlBuilderWithScheme {
    scheme: String,
}

impl UrlBuilderWithScheme {
    pub fn server(&self, server: impl Into<String>) -> UrlBuilderWithServer {
        UrlBuilderWithServer {
            scheme: self.scheme.clone(),
            server: server.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlBuilderWithServer {
    scheme: String,
    server: String,
}

impl UrlBuilderWithServer {
    pub fn path_elements<I, S>(&self, elements: I) -> UrlBuilderWithPath
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UrlBuilderWithPath {
            scheme: Some(self.scheme.clone()),
            server: Some(self.server.clone()),
            absolute: true,
            path_elements: elements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Start of a path-only reference, either `/a/b` or `a/b`.
#[derive(Debug, Clone)]
pub struct UrlBuilderWithRoot {
    absolute: bool,
}

impl UrlBuilderWithRoot {
    pub(crate) fn new(absolute: bool) -> Self {
        Self { absolute }
    }

    pub fn path_elements<I, S>(&self, elements: I) -> UrlBuilderWithPath
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UrlBuilderWithPath {
            scheme: None,
            server: None,
            absolute: self.absolute,
            path_elements: elements.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlBuilderWithPath {
    scheme: Option<String>,
    server: Option<String>,
    absolute: bool,
    path_elements: Vec<String>,
}

impl UrlBuilderWithPath {
    /// Returns a new builder with `elements` appended to a copy of the
    /// current ones. `self` stays untouched.
    pub fn path_elements<I, S>(&self, elements: I) -> UrlBuilderWithPath
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.path_elements
            .extend(elements.into_iter().map(Into::into));
        next
    }

    /// Raw elements, safe to hand to another builder without double encoding.
    pub fn get_path_elements(&self) -> &[String] {
        &self.path_elements
    }

    pub fn kind(&self) -> UriKind {
        match (&self.scheme, self.absolute) {
            (Some(_), _) => UriKind::Url,
            (None, true) => UriKind::AbsolutePath,
            (None, false) => UriKind::RelativePath,
        }
    }

    pub fn build(&self) -> Result<Uri> {
        let kind = self.kind();
        let mut value = String::new();

        if let Some(scheme) = &self.scheme {
            validate_scheme(scheme)?;
            value.push_str(scheme);
            value.push(':');
        }
        if let Some(server) = &self.server {
            validate_server(server)?;
            value.push_str("//");
            value.push_str(server);
        }
        if self.absolute {
            value.push('/');
        }

        let path_offset = value.len();
        let mut path = combine_path_elements(PathSeparator::Slash, &self.path_elements);

        if kind != UriKind::Url {
            // Without an authority, a leading empty segment would turn the
            // path into `//authority`.
            if self.path_elements.len() > 1 && self.path_elements[0].is_empty() {
                return Err(UriError::invalid(
                    "path element",
                    "",
                    "The first path element must not be empty without a server",
                ));
            }
        }
        if kind == UriKind::RelativePath {
            // RFC 3986 4.2: the first segment of a relative path must not
            // contain ':' or it reads as a scheme.
            let first_len = path.find('/').unwrap_or(path.len());
            if path[..first_len].contains(':') {
                let first = path[..first_len].replace(':', "%3A");
                path.replace_range(..first_len, &first);
            }
        }
        value.push_str(&path);

        if kind == UriKind::Url {
            self.check_authority(&value[..path_offset])?;
        }

        tracing::debug!(uri = %value, ?kind, "built URI");
        Ok(Uri::new(kind, value, path_offset))
    }

    /// `prefix` is `scheme://server/`. The parser must read the server as the
    /// whole authority: nothing may spill over into path, query or fragment.
    fn check_authority(&self, prefix: &str) -> Result<()> {
        let server = self.server.as_deref().unwrap_or_default();
        let parsed = Url::parse(prefix)
            .map_err(|e| UriError::invalid("server", server, e.to_string()))?;

        if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(UriError::invalid(
                "server",
                server,
                format!("Server is not a plain authority, parsed path is '{}'", parsed.path()),
            ));
        }
        Ok(())
    }
}

impl BuildUri for UrlBuilderWithPath {
    fn raw_elements(&self) -> &[String] {
        self.get_path_elements()
    }

    fn build(&self) -> Result<Uri> {
        UrlBuilderWithPath::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servername() -> UrlBuilderWithServer {
        UrlBuilder::new().scheme("https").server("servername")
    }

    #[test]
    fn test_url_without_path_elements() {
        let empty: [&str; 0] = [];
        let uri = servername().path_elements(empty).build().unwrap();
        assert_eq!(uri.as_str(), "https://servername/");
        assert_eq!(uri.kind(), UriKind::Url);
        assert!(uri.path_elements().unwrap().is_empty());
    }

    #[test]
    fn test_server_with_port() {
        let uri = UrlBuilder::new()
            .scheme("http")
            .server("localhost:8080")
            .path_elements(["api"])
            .build()
            .unwrap();
        assert_eq!(uri.as_str(), "http://localhost:8080/api");
        assert_eq!(uri.to_url().unwrap().port(), Some(8080));
    }

    #[test]
    fn test_invalid_scheme_is_rejected() {
        let result = UrlBuilder::new()
            .scheme("1https")
            .server("servername")
            .path_elements(["rest"])
            .build();
        assert!(matches!(result, Err(UriError::InvalidComponent { ref component, .. }) if component == "scheme"));
    }

    #[test]
    fn test_invalid_server_is_rejected() {
        for server in ["", "server name", "host/path", "host:port", "servername\\evil"] {
            let result = UrlBuilder::new()
                .scheme("https")
                .server(server)
                .path_elements(["rest"])
                .build();
            assert!(result.is_err(), "server '{}' should be rejected", server);
        }
    }

    #[test]
    fn test_backslash_in_server_is_rejected() {
        let result = UrlBuilder::new()
            .scheme("https")
            .server("servername\\evil")
            .path_elements(["rest"])
            .build();
        assert!(matches!(result, Err(UriError::InvalidComponent { ref component, .. }) if component == "server"));
    }

    #[test]
    fn test_authority_must_not_spill_into_path() {
        let builder = UrlBuilder::new()
            .scheme("https")
            .server("servername\\evil")
            .path_elements(["rest"]);
        let err = builder.check_authority("https://servername\\evil/").unwrap_err();
        assert!(err.to_string().contains("/evil/"));

        assert!(servername().path_elements(["rest"]).check_authority("https://servername/").is_ok());
        assert!(UrlBuilder::new()
            .scheme("https")
            .server("user@servername:8443")
            .path_elements(["rest"])
            .build()
            .is_ok());
    }

    #[test]
    fn test_dot_elements_are_kept_verbatim() {
        let uri = servername().path_elements(["rest", ".."]).build().unwrap();
        assert_eq!(uri.as_str(), "https://servername/rest/..");
        assert_eq!(uri.path_elements().unwrap(), vec!["rest", ".."]);
        // URL parsing removes dot segments.
        assert_eq!(uri.to_url().unwrap().path(), "/");
    }

    #[test]
    fn test_appending_does_not_modify_original() {
        let base = servername().path_elements(["rest"]);
        let extended = base.path_elements(["customers"]);
        assert_eq!(base.get_path_elements(), ["rest"]);
        assert_eq!(extended.get_path_elements(), ["rest", "customers"]);
    }

    #[test]
    fn test_relative_first_segment_colon_is_escaped() {
        let uri = UrlBuilderWithRoot::new(false)
            .path_elements(["urn:x", "a:b"])
            .build()
            .unwrap();
        assert_eq!(uri.as_str(), "urn%3Ax/a:b");
        assert_eq!(uri.path_elements().unwrap(), vec!["urn:x", "a:b"]);
    }

    #[test]
    fn test_absolute_path_keeps_colon() {
        let uri = UrlBuilderWithRoot::new(true)
            .path_elements(["a:b"])
            .build()
            .unwrap();
        assert_eq!(uri.as_str(), "/a:b");
    }

    #[test]
    fn test_leading_empty_element_without_server() {
        let result = UrlBuilderWithRoot::new(true).path_elements(["", "host"]).build();
        assert!(result.is_err());

        let uri = servername().path_elements(["", "x"]).build().unwrap();
        assert_eq!(uri.as_str(), "https://servername//x");
    }

    #[test]
    fn test_kind_follows_stage() {
        assert_eq!(servername().path_elements(["a"]).kind(), UriKind::Url);
        assert_eq!(UrlBuilderWithRoot::new(true).path_elements(["a"]).kind(), UriKind::AbsolutePath);
        assert_eq!(UrlBuilderWithRoot::new(false).path_elements(["a"]).kind(), UriKind::RelativePath);
    }
}

use crate::core::url_builder::{UrlBuilder, UrlBuilderWithRoot};
use crate::core::urn_builder::UrnBuilder;

/// Entry points for the two kinds of URI: URLs (full, absolute path or
/// relative path) and URNs.
pub struct UriBuilder;

impl UriBuilder {
    pub fn create_url() -> UrlBuilder {
        UrlBuilder::new()
    }

    /// `a/b`, resolved by the caller against some base.
    pub fn create_relative_url() -> UrlBuilderWithRoot {
        UrlBuilderWithRoot::new(false)
    }

    /// `/a/b`
    pub fn create_absolute_url() -> UrlBuilderWithRoot {
        UrlBuilderWithRoot::new(true)
    }

    pub fn create_urn() -> UrnBuilder {
        UrnBuilder::new()
    }
}

#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::{CommandOutput, CommandRunner};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{OutputFormat, TomlConfig};
pub use crate::core::{
    encoding::{combine_path_elements, decode_path_element, encode_path_element},
    uri_builder::UriBuilder,
    url_builder::{UrlBuilder, UrlBuilderWithPath, UrlBuilderWithRoot, UrlBuilderWithServer},
    urn_builder::{UrnBuilder, UrnBuilderWithNamespace},
};
pub use domain::{
    model::{PathSeparator, Uri, UriKind},
    ports::BuildUri,
};
pub use utils::error::{Result, UriError};

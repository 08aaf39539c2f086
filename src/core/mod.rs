pub mod encoding;
pub mod uri_builder;
pub mod url_builder;
pub mod urn_builder;

pub use crate::domain::model::{PathSeparator, Uri, UriKind};
pub use crate::domain::ports::BuildUri;
pub use crate::utils::error::Result;

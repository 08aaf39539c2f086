use crate::domain::model::Uri;
use crate::utils::error::Result;

/// Final stage of a builder: something that can be turned into a [`Uri`].
pub trait BuildUri {
    /// Raw, not yet encoded elements collected so far.
    fn raw_elements(&self) -> &[String];

    fn build(&self) -> Result<Uri>;
}

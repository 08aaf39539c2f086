use crate::core::encoding::combine_path_elements;
use crate::domain::model::{PathSeparator, Uri, UriKind};
use crate::domain::ports::BuildUri;
use crate::utils::error::{Result, UriError};
use crate::utils::validation::validate_namespace;

const URN_PREFIX: &str = "urn:";

#[derive(Debug, Clone, Default)]
pub struct UrnBuilder;

impl UrnBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn namespace(&self, nid: impl Into<String>) -> UrnBuilderWithNamespace {
        UrnBuilderWithNamespace {
            namespace: nid.into(),
            elements: Vec::new(),
        }
    }
}

/// `urn:<nid>:<e1>:<e2>...`, with `:` escaped inside the elements.
#[derive(Debug, Clone)]
pub struct UrnBuilderWithNamespace {
    namespace: String,
    elements: Vec<String>,
}

impl UrnBuilderWithNamespace {
    pub fn elements<I, S>(&self, elements: I) -> UrnBuilderWithNamespace
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.elements.extend(elements.into_iter().map(Into::into));
        next
    }

    pub fn get_elements(&self) -> &[String] {
        &self.elements
    }

    pub fn build(&self) -> Result<Uri> {
        validate_namespace(&self.namespace)?;
        if self.elements.is_empty() {
            return Err(UriError::MissingComponent {
                component: "namespace specific string".to_string(),
            });
        }

        let mut value = String::from(URN_PREFIX);
        value.push_str(&self.namespace);
        value.push(':');
        let path_offset = value.len();
        value.push_str(&combine_path_elements(PathSeparator::Colon, &self.elements));

        tracing::debug!(uri = %value, "built URN");
        Ok(Uri::new(UriKind::Urn, value, path_offset))
    }
}

impl BuildUri for UrnBuilderWithNamespace {
    fn raw_elements(&self) -> &[String] {
        self.get_elements()
    }

    fn build(&self) -> Result<Uri> {
        UrnBuilderWithNamespace::build(self)
    }
}

use crate::config::cli::Command;
use crate::config::{OutputFormat, TomlConfig};
use crate::core::encoding::{decode_path_element, encode_path_element};
use crate::core::uri_builder::UriBuilder;
use crate::domain::model::{Uri, UriKind};
use crate::domain::ports::BuildUri;
use crate::utils::error::{Result, UriError};
use serde::Serialize;

/// Result of one CLI command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Uri {
        kind: UriKind,
        uri: String,
        elements: Vec<String>,
    },
    Transform {
        input: String,
        output: String,
    },
}

impl CommandOutput {
    fn from_uri(uri: Uri, elements: &[String]) -> Self {
        CommandOutput::Uri {
            kind: uri.kind(),
            uri: uri.into_string(),
            elements: elements.to_vec(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(match self {
                CommandOutput::Uri { uri, .. } => uri.clone(),
                CommandOutput::Transform { output, .. } => output.clone(),
            }),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Runs CLI commands against defaults from an optional config file.
/// Command-line values win over file values.
pub struct CommandRunner {
    file: TomlConfig,
}

impl CommandRunner {
    pub fn new(file: Option<TomlConfig>) -> Self {
        Self {
            file: file.unwrap_or_default(),
        }
    }

    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or_else(|| self.file.output_format()).unwrap_or_default()
    }

    pub fn run(&self, command: &Command) -> Result<CommandOutput> {
        tracing::debug!(?command, "running command");

        match command {
            Command::Url {
                scheme,
                server,
                no_base_path,
                elements,
            } => {
                let scheme = required("scheme", scheme.as_deref().or(self.file.scheme()))?;
                let server = required("server", server.as_deref().or(self.file.server()))?;
                let base: &[String] = if *no_base_path {
                    &[]
                } else {
                    self.file.base_path()
                };

                let builder = UriBuilder::create_url()
                    .scheme(scheme)
                    .server(server)
                    .path_elements(base)
                    .path_elements(elements);
                self.emit(&builder)
            }
            Command::Relative { elements } => {
                self.emit(&UriBuilder::create_relative_url().path_elements(elements))
            }
            Command::Absolute { elements } => {
                self.emit(&UriBuilder::create_absolute_url().path_elements(elements))
            }
            Command::Urn {
                namespace,
                elements,
            } => {
                let namespace =
                    required("namespace", namespace.as_deref().or(self.file.namespace()))?;
                self.emit(&UriBuilder::create_urn().namespace(namespace).elements(elements))
            }
            Command::Encode { separator, element } => Ok(CommandOutput::Transform {
                input: element.clone(),
                output: encode_path_element(element, *separator),
            }),
            Command::Decode { text } => Ok(CommandOutput::Transform {
                input: text.clone(),
                output: decode_path_element(text)?,
            }),
        }
    }

    fn emit(&self, builder: &impl BuildUri) -> Result<CommandOutput> {
        let uri = builder.build()?;
        tracing::info!(kind = ?uri.kind(), "built {}", uri);
        Ok(CommandOutput::from_uri(uri, builder.raw_elements()))
    }
}

fn required<'a>(component: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| UriError::MissingComponent {
        component: component.to_string(),
    })
}

use crate::domain::model::PathSeparator;
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build a full URL: scheme://server/<base path>/<elements>
    Url {
        #[arg(long)]
        scheme: Option<String>,

        #[arg(long)]
        server: Option<String>,

        /// Ignore the base path from the config file
        #[arg(long)]
        no_base_path: bool,

        /// Raw path elements, encoded one by one
        elements: Vec<String>,
    },

    /// Build a relative reference: a/b
    Relative { elements: Vec<String> },

    /// Build an absolute path: /a/b
    Absolute { elements: Vec<String> },

    /// Build a URN: urn:<namespace>:a:b
    Urn {
        #[arg(long)]
        namespace: Option<String>,

        #[arg(required = true)]
        elements: Vec<String>,
    },

    /// Percent-encode a single path element
    Encode {
        #[arg(long, value_enum, default_value_t = PathSeparator::Slash)]
        separator: PathSeparator,

        element: String,
    },

    /// Decode a single percent-encoded path element
    Decode { text: String },
}

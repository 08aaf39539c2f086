use crate::utils::error::{Result, UriError};
use crate::utils::validation::{validate_namespace, validate_scheme, validate_server, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 輸出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoint: Option<EndpointConfig>,
    pub urn: Option<UrnConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub scheme: Option<String>,
    pub server: Option<String>,
    /// Raw elements placed in front of every URL built from this endpoint.
    pub base_path: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrnConfig {
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UriError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_SERVER})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UriError::ConfigValidation {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn scheme(&self) -> Option<&str> {
        self.endpoint.as_ref()?.scheme.as_deref()
    }

    pub fn server(&self) -> Option<&str> {
        self.endpoint.as_ref()?.server.as_deref()
    }

    pub fn base_path(&self) -> &[String] {
        self.endpoint
            .as_ref()
            .and_then(|e| e.base_path.as_deref())
            .unwrap_or_default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.urn.as_ref()?.namespace.as_deref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref()?.format
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let as_config_error = |field: &str, e: UriError| UriError::ConfigValidation {
            field: field.to_string(),
            message: e.to_string(),
        };

        if let Some(scheme) = self.scheme() {
            validate_scheme(scheme).map_err(|e| as_config_error("endpoint.scheme", e))?;
        }
        if let Some(server) = self.server() {
            validate_server(server).map_err(|e| as_config_error("endpoint.server", e))?;
        }
        if let Some(namespace) = self.namespace() {
            validate_namespace(namespace).map_err(|e| as_config_error("urn.namespace", e))?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

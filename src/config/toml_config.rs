use crate::config::AdminConfig;
use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings loaded from a TOML file, e.g.:
///
/// ```toml
/// [admin]
/// service_url = "https://broker.example.com:8443"
/// auth_token = "${BOOKIE_ADMIN_TOKEN}"
/// read_timeout_ms = 30000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub admin: AdminConfig,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdminError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AdminError::Config {
            field: "toml".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` references with the environment value; unset
/// variables are left verbatim.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

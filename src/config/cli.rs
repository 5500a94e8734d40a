use crate::config::toml_config::TomlConfig;
use crate::config::{AdminConfig, DEFAULT_SERVICE_URL};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookie-admin")]
#[command(about = "Manage bookie rack placement through the broker admin REST API")]
pub struct CliArgs {
    #[arg(long, env = "BOOKIE_ADMIN_URL", help = "Admin REST endpoint base URL")]
    pub service_url: Option<String>,

    #[arg(long, env = "BOOKIE_ADMIN_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    #[arg(long, help = "Deadline for each blocking call, in milliseconds")]
    pub read_timeout_ms: Option<u64>,

    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    #[arg(long, help = "Load connection settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List rack placement for every bookie, grouped by group
    RacksPlacement,

    /// Show rack placement for one bookie
    Get { bookie: String },

    /// Create or update rack placement for one bookie
    Set {
        bookie: String,

        #[arg(long)]
        rack: String,

        #[arg(long, default_value = "default")]
        group: String,

        #[arg(long)]
        hostname: Option<String>,
    },

    /// Remove rack placement for one bookie
    Delete { bookie: String },
}

impl CliArgs {
    /// Resolves the connection settings: the TOML file (if any) provides the
    /// base, explicit flags and env vars override it.
    pub fn admin_config(&self) -> Result<AdminConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.admin,
            None => AdminConfig::new(DEFAULT_SERVICE_URL),
        };

        if let Some(url) = &self.service_url {
            config.service_url = url.clone();
        }
        if let Some(token) = &self.auth_token {
            config.auth_token = Some(token.clone());
        }
        if let Some(millis) = self.read_timeout_ms {
            config.read_timeout_ms = millis;
        }
        if let Some(millis) = self.connect_timeout_ms {
            config.connect_timeout_ms = millis;
        }

        Ok(config)
    }
}

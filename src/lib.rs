pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliArgs, Command};
pub use crate::config::AdminConfig;

pub use crate::core::blocking;
pub use crate::core::bookies::BookiesAdmin;
pub use crate::core::pending::PendingOperation;
pub use crate::core::rest::RestClient;
pub use crate::domain::model::{BookieInfo, RackConfiguration};
pub use crate::domain::ports::AdminTransport;
pub use crate::utils::error::{AdminError, Result};

pub mod blocking;
pub mod bookies;
pub mod pending;
pub mod rest;

pub use crate::domain::model::{BookieInfo, RackConfiguration};
pub use crate::domain::ports::AdminTransport;
pub use crate::utils::error::Result;

//! Blocking counterpart of [`BookiesAdmin`](crate::core::bookies::BookiesAdmin).
//!
//! Each call starts one pending operation on an internal runtime and waits
//! for it under the configured read timeout. A call that hits the deadline
//! abandons the wait; the request itself is not cancelled and keeps running
//! on the runtime's worker thread.

use crate::config::AdminConfig;
use crate::core::bookies;
use crate::core::rest::RestClient;
use crate::domain::model::{BookieInfo, RackConfiguration};
use crate::utils::error::{AdminError, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

#[derive(Debug)]
pub struct BookiesAdmin {
    inner: bookies::BookiesAdmin<RestClient>,
    runtime: Runtime,
    read_timeout: Duration,
}

impl BookiesAdmin {
    /// Builds the transport and the runtime backing the blocking calls.
    ///
    /// Must not be called from within an async context; use
    /// [`bookies::BookiesAdmin`] there instead.
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("bookie-admin")
            .enable_all()
            .build()?;
        let transport = RestClient::new(config)?;

        Ok(Self {
            inner: bookies::BookiesAdmin::new(Arc::new(transport)),
            runtime,
            read_timeout: Duration::from_millis(config.read_timeout_ms),
        })
    }

    pub fn racks_info(&self) -> Result<RackConfiguration> {
        self.wait(|admin| admin.racks_info_async())
    }

    pub fn bookie_rack_info(&self, bookie_address: &str) -> Result<BookieInfo> {
        self.wait(|admin| admin.bookie_rack_info_async(bookie_address))
    }

    pub fn delete_bookie_rack_info(&self, bookie_address: &str) -> Result<()> {
        self.wait(|admin| admin.delete_bookie_rack_info_async(bookie_address))
    }

    pub fn update_bookie_rack_info(
        &self,
        bookie_address: &str,
        group: &str,
        info: &BookieInfo,
    ) -> Result<()> {
        self.wait(|admin| admin.update_bookie_rack_info_async(bookie_address, group, info))
    }

    /// Starts one pending operation and waits for it under the read timeout.
    ///
    /// The pending operation resolves to an already-mapped `AdminError` on
    /// failure, which is surfaced as-is so callers can match on the variant.
    fn wait<T, F, P>(&self, start: F) -> Result<T>
    where
        F: FnOnce(&bookies::BookiesAdmin<RestClient>) -> P,
        P: Future<Output = Result<T>>,
    {
        let read_timeout = self.read_timeout;
        self.runtime.block_on(async {
            let pending = start(&self.inner);
            match tokio::time::timeout(read_timeout, pending).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        "Admin call did not complete within {} ms, abandoning the wait",
                        read_timeout.as_millis()
                    );
                    Err(AdminError::Timeout {
                        elapsed_ms: read_timeout.as_millis() as u64,
                    })
                }
            }
        })
    }
}

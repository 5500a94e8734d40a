use crate::core::pending::PendingOperation;
use crate::domain::model::{BookieInfo, RackConfiguration};
use crate::domain::ports::AdminTransport;
use std::sync::Arc;

const BOOKIES: &str = "bookies";
const RACKS_INFO: &str = "racks-info";

/// Async adapter for the bookie rack-configuration endpoints.
///
/// Each method issues exactly one outbound request, immediately, and returns
/// a [`PendingOperation`] that resolves once with the decoded payload or a
/// domain error. No retries, no caching. All methods must be called from
/// within a tokio runtime; the blocking counterpart lives in
/// [`crate::core::blocking`].
#[derive(Debug, Clone)]
pub struct BookiesAdmin<T: AdminTransport> {
    transport: Arc<T>,
}

impl<T: AdminTransport + 'static> BookiesAdmin<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches rack placement for every bookie, grouped by group.
    pub fn racks_info_async(&self) -> PendingOperation<RackConfiguration> {
        let transport = Arc::clone(&self.transport);
        PendingOperation::spawn(async move {
            let value = transport.get_json(&[BOOKIES, RACKS_INFO]).await?;
            Ok(serde_json::from_value(value)?)
        })
    }

    /// Fetches rack placement for one bookie.
    pub fn bookie_rack_info_async(&self, bookie_address: &str) -> PendingOperation<BookieInfo> {
        let transport = Arc::clone(&self.transport);
        let address = bookie_address.to_string();
        PendingOperation::spawn(async move {
            let value = transport.get_json(&[BOOKIES, RACKS_INFO, &address]).await?;
            Ok(serde_json::from_value(value)?)
        })
    }

    /// Removes rack placement for one bookie.
    pub fn delete_bookie_rack_info_async(&self, bookie_address: &str) -> PendingOperation<()> {
        let transport = Arc::clone(&self.transport);
        let address = bookie_address.to_string();
        PendingOperation::spawn(
            async move { transport.delete(&[BOOKIES, RACKS_INFO, &address]).await },
        )
    }

    /// Creates or replaces rack placement for one bookie within `group`.
    pub fn update_bookie_rack_info_async(
        &self,
        bookie_address: &str,
        group: &str,
        info: &BookieInfo,
    ) -> PendingOperation<()> {
        let transport = Arc::clone(&self.transport);
        let address = bookie_address.to_string();
        let group = group.to_string();
        let body = serde_json::to_value(info);
        PendingOperation::spawn(async move {
            let body = body?;
            transport
                .post_json(
                    &[BOOKIES, RACKS_INFO, &address],
                    &[("group", group.as_str())],
                    &body,
                )
                .await
        })
    }
}

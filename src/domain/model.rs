use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placement metadata for a single storage node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookieInfo {
    pub rack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl BookieInfo {
    pub fn new(rack: impl Into<String>) -> Self {
        Self {
            rack: rack.into(),
            hostname: None,
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }
}

/// Rack placement for the whole cluster: group name -> (bookie address -> info).
/// Sorted maps so listings render in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RackConfiguration(pub BTreeMap<String, BTreeMap<String, BookieInfo>>);

impl RackConfiguration {
    pub fn group(&self, name: &str) -> Option<&BTreeMap<String, BookieInfo>> {
        self.0.get(name)
    }

    /// Looks a bookie up across all groups.
    pub fn bookie(&self, address: &str) -> Option<&BookieInfo> {
        self.0.values().find_map(|group| group.get(address))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|group| group.is_empty())
    }

    /// Total number of bookies across all groups.
    pub fn len(&self) -> usize {
        self.0.values().map(|group| group.len()).sum()
    }
}

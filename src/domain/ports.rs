use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Verb primitives the admin adapter needs from an HTTP transport.
///
/// Implementations translate every remote or transport failure into an
/// `AdminError` before returning, so callers never observe a raw HTTP error.
#[async_trait]
pub trait AdminTransport: Send + Sync {
    async fn get_json(&self, segments: &[&str]) -> Result<Value>;

    async fn post_json(&self, segments: &[&str], query: &[(&str, &str)], body: &Value)
        -> Result<()>;

    async fn delete(&self, segments: &[&str]) -> Result<()>;
}

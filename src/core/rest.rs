use crate::config::AdminConfig;
use crate::domain::ports::AdminTransport;
use crate::utils::error::{AdminError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Admin API version prefix. Trailing slash so joins stay inside the prefix.
const ADMIN_BASE_PATH: &str = "admin/v2/";

/// Authenticated HTTP transport for the admin REST API.
///
/// Built once per client; shared read-only across all calls. The per-request
/// read deadline is owned by the blocking layer, only the connect timeout is
/// applied here.
#[derive(Debug, Clone)]
pub struct RestClient {
    base: Url,
    auth_token: Option<String>,
    client: Client,
}

impl RestClient {
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let service_url = Url::parse(&config.service_url).map_err(|e| AdminError::Config {
            field: "service_url".to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let base = service_url
            .join(ADMIN_BASE_PATH)
            .map_err(|e| AdminError::Config {
                field: "service_url".to_string(),
                reason: format!("Cannot join admin base path: {}", e),
            })?;

        let client = Client::builder()
            .user_agent(concat!("bookie-admin/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;

        Ok(Self {
            base,
            auth_token: config.auth_token.clone(),
            client,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| AdminError::Config {
                field: "service_url".to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_status(status, body))
    }
}

#[async_trait]
impl AdminTransport for RestClient {
    async fn get_json(&self, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);

        let response = self.apply_auth(self.client.get(url)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<Value>().await?)
    }

    async fn post_json(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<()> {
        let url = self.endpoint(segments)?;
        tracing::debug!("POST {}", url);

        let response = self
            .apply_auth(self.client.post(url).query(query).json(body))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments)?;
        tracing::debug!("DELETE {}", url);

        let response = self.apply_auth(self.client.delete(url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Translates a remote error response into the domain error hierarchy.
pub(crate) fn map_status(status: StatusCode, body: String) -> AdminError {
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        body
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AdminError::NotAuthorized { message },
        StatusCode::NOT_FOUND => AdminError::NotFound { message },
        StatusCode::CONFLICT => AdminError::Conflict { message },
        StatusCode::PRECONDITION_FAILED => AdminError::PreconditionFailed { message },
        _ => AdminError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

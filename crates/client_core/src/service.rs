use async_trait::async_trait;
use reqwest::Client;
use shared::domain::{RequestVariant, TitleRecord};
use tracing::debug;

use crate::error::FetchError;

/// Boundary for issuing a title request. Injected into the dispatcher so
/// tests can substitute a double for the real HTTP client.
#[async_trait]
pub trait TitleService: Send + Sync {
    async fn fetch_title(&self, variant: RequestVariant) -> Result<TitleRecord, FetchError>;
}

/// reqwest-backed [`TitleService`] talking to the remote generator.
pub struct HttpTitleService {
    http: Client,
    base_url: String,
}

impl HttpTitleService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn request_url(&self, variant: RequestVariant) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            variant.endpoint_path()
        )
    }
}

#[async_trait]
impl TitleService for HttpTitleService {
    async fn fetch_title(&self, variant: RequestVariant) -> Result<TitleRecord, FetchError> {
        let url = self.request_url(variant);
        debug!(%url, variant = variant.label(), "requesting fake title");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Protocol {
                status: status.as_u16(),
            });
        }

        response
            .json::<TitleRecord>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

use reqwest::{Client, Url};
use serde_json::Value;

use crate::source::{OrderQueryRequest, OrderSource, SourceError, SourceResult};

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            SourceError::Status(status.as_u16())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

/// Posts order queries as JSON to a fixed endpoint.
///
/// No timeout and no retry are configured.
#[derive(Clone, Debug)]
pub struct HttpOrderSource {
    client: Client,
    endpoint: Url,
}

impl HttpOrderSource {
    pub fn new(endpoint: &str) -> SourceResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| SourceError::Transport(format!("invalid endpoint '{endpoint}': {e}")))?;
        Ok(Self::with_client(Client::new(), endpoint))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl OrderSource for HttpOrderSource {
    async fn query_orders(&self, request: &OrderQueryRequest) -> SourceResult<Value> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

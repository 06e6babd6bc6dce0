use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    common::{CedricConfig, entities::app_errors::CoreError},
    text_processing::{ports::TextProcessorClient, value_objects::ProcessTextInput},
};

/// HTTP client for the Cedric text-processing API. One configurable client
/// covers both the pipeline and ad-hoc callers.
#[derive(Debug, Clone)]
pub struct CedricClient {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CedricResponse {
    #[serde(default)]
    text: Option<String>,
}

impl CedricClient {
    pub fn new(config: CedricConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_url: config.api_url,
            api_key: config.api_key,
            client,
        })
    }
}

impl TextProcessorClient for CedricClient {
    async fn process_text(&self, input: ProcessTextInput) -> Result<String, CoreError> {
        let mut payload = Map::new();
        payload.insert("text".to_string(), Value::String(input.text));
        for (key, value) in input.extra {
            payload.insert(key, value);
        }

        let mut request = self.client.post(&self.api_url).json(&Value::Object(payload));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Cedric API request failed: {}", e);
            CoreError::Processing(format!("Cedric API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Cedric API error: {} - {}", status, error_text);
            return Err(CoreError::Processing(format!(
                "Cedric API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: CedricResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse Cedric response: {}", e);
            CoreError::Processing(format!("failed to parse Cedric response: {}", e))
        })?;

        Ok(body.text.unwrap_or_default())
    }
}

//! HTTP client for the remote generative-model endpoint.

use std::future::Future;

use tracing::{debug, warn};

use crate::{
    error::Error,
    models::{ModelParams, Request, Response},
};

/// Default API endpoint for the generative-model service
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";

/// A remote language-model capability.
///
/// Both pipeline stages go through this seam, so tests can swap the HTTP
/// client for a scripted stand-in.
pub trait LanguageModel {
    /// Sends one generation request and awaits the complete response.
    fn generate(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, Error>> + Send;
}

/// HTTP-backed client for the generative-model API.
///
/// Holds a single shared connection pool; cloning is cheap and a clone can
/// serve concurrent, independently-failing requests.
#[derive(Debug, Clone)]
pub struct ModelClient {
    api_key: String,
    params: ModelParams,
    client: reqwest::Client,
}

impl ModelClient {
    /// Creates a new client with the specified API key and model parameters.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key for authentication
    /// * `params` - The model parameters
    pub fn new(api_key: impl Into<String>, params: impl Into<ModelParams>) -> Self {
        Self {
            api_key: api_key.into(),
            params: params.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GOOGLE_API_KEY` - The API key for authentication
    ///
    /// # Arguments
    ///
    /// * `model` - The model identifier (e.g., "gemini-1.5-flash")
    ///
    /// # Errors
    ///
    /// Returns an error if the required environment variable is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self, Error> {
        let api_key = std::env::var("GOOGLE_API_KEY")?;
        Ok(Self::new(
            api_key,
            ModelParams::builder().model(model).build(),
        ))
    }

    fn build_url(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent?key={}",
            DEFAULT_BASE_URL, DEFAULT_API_VERSION, self.params.model, self.api_key
        )
    }
}

impl LanguageModel for ModelClient {
    async fn generate(&self, request: Request) -> Result<Response, Error> {
        let url = self.build_url();
        debug!(model = %self.params.model, "dispatching generateContent request");

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "generateContent request rejected");
            return Err(Error::api(format!(
                "Request failed with status {}: {}",
                status, error_body
            )));
        }

        Ok(response.json().await?)
    }
}

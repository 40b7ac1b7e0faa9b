use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::time::Duration;

const MAX_NEW_TOKENS: usize = 200;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.3;

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters
{   pub max_new_tokens: usize
  , pub temperature: f32
  , pub top_p: f32
}

impl Default for GenerationParameters
{   fn default() -> Self
    {   GenerationParameters
        {   max_new_tokens: MAX_NEW_TOKENS
          , temperature: TEMPERATURE
          , top_p: TOP_P
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest
{   pub inputs: String
  , pub parameters: GenerationParameters
}

impl InferenceRequest
{   pub fn new(inputs: String) -> Self
    {   InferenceRequest
        {   inputs
          , parameters: GenerationParameters::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Generation
{   pub generated_text: String
}

// ===== Hugging Face Client =====

/// Text-generation client for the Hugging Face Inference API.
///
/// Holds no per-request state: the API key arrives with every call, so one
/// client can serve any number of concurrent invocations.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient
{   endpoint: String
  , http_client: reqwest::Client
}

impl HuggingFaceClient
{   pub fn new(config: &crate::config::InferenceConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating HuggingFaceClient for: {}", config.model);

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(HuggingFaceClient
        {   endpoint: format!(
              "{}/models/{}",
              config.api_base.trim_end_matches('/'),
              config.model
            )
          , http_client
        })
    }

    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    /// Run one text generation and return the first candidate verbatim
    pub async fn generate(
      &self
    , api_key: &str
    , prompt: String
    ) -> Result<String, crate::error::Error>
    {   let request = InferenceRequest::new(prompt);
        trace!("Inference request: {:?}", request);

        let response = self.http_client
          .post(&self.endpoint)
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            debug!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Inference response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            debug!("Inference API error {}: {}", status, body);
            return Err(crate::error::Error::ApiError
            {   status: status.as_u16()
              , body
            });
        }

        let body = response.text().await.map_err(|e| {
          debug!("Failed to read response body: {}", e);
          crate::error::Error::HttpError(e.to_string())
        })?;

        let generations: Vec<Generation>
          = serde_json::from_str(&body).map_err(|e| {
            debug!("Parse error: {} (body: {})", e, body);
            crate::error::Error::ParseError(e.to_string())
          })?;

        generations.into_iter()
          .next()
          .map(|g| g.generated_text)
          .ok_or_else(|| {
            debug!("No generations in response");
            crate::error::Error::EmptyResponse
          })
    }
}

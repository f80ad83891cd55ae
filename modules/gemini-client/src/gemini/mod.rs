mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::traits::{Message, TextGenerator};
use client::GeminiClient;
use types::GenerateContentRequest;

// =============================================================================
// Gemini Agent
// =============================================================================

/// A configured connection to the Gemini text-generation API, reused
/// across invocations. Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    base_url: Option<String>,
    temperature: Option<f32>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            temperature: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate_text(&self, messages: &[Message]) -> Result<String> {
        let mut request = GenerateContentRequest::from_messages(messages);

        if let Some(temp) = self.temperature {
            request = request.temperature(temp);
        }

        let response = self.client().generate_content(&self.model, &request).await?;

        response
            .text()
            .ok_or_else(|| anyhow!("No text in Gemini response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_new() {
        let ai = Gemini::new("test-key", "gemini-2.0-flash");
        assert_eq!(ai.model(), "gemini-2.0-flash");
        assert_eq!(ai.api_key, "test-key");
        assert!(ai.base_url.is_none());
    }

    #[test]
    fn test_gemini_with_base_url() {
        let ai = Gemini::new("test-key", "gemini-2.0-flash")
            .with_base_url("http://localhost:8080/v1beta");
        assert_eq!(ai.base_url.as_deref(), Some("http://localhost:8080/v1beta"));
    }

    #[test]
    fn test_gemini_with_temperature() {
        let ai = Gemini::new("test-key", "gemini-2.0-flash").with_temperature(0.0);
        assert_eq!(ai.temperature, Some(0.0));
    }
}

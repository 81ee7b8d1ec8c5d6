//! Creative writing prompts from the OpenAI completions API.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::traits::SuggestionAdapter;
use crate::error::{CoreError, Result};

const OPENAI_API: &str = "https://api.openai.com";
const MODEL: &str = "gpt-3.5-turbo-instruct";
const MAX_TOKENS: u32 = 50;

pub const UNCONFIGURED: &str = "🎨 Default Prompt: Draw your favorite memory";
pub const FALLBACK: &str = "🎨 Express yourself through simple sketching";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

pub struct CreativePromptAdapter {
    api_key: String,
    base_url: String,
}

impl CreativePromptAdapter {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, OPENAI_API)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn fetch(&self) -> Result<String> {
        let body = json!({
            "model": MODEL,
            "prompt": "Generate a creative writing prompt",
            "max_tokens": MAX_TOKENS,
        });

        let resp: CompletionResponse = Client::new()
            .post(format!("{}/v1/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let text = resp
            .choices
            .first()
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::Custom("completion returned no text".into()))?;
        Ok(format!("🎨 Prompt: {text}"))
    }
}

impl SuggestionAdapter for CreativePromptAdapter {
    fn name(&self) -> &str {
        "creative"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn suggest(&self) -> String {
        if !self.is_configured() {
            return UNCONFIGURED.to_string();
        }
        self.fetch().unwrap_or_else(|e| {
            tracing::debug!(adapter = self.name(), "suggestion request failed: {e}");
            FALLBACK.to_string()
        })
    }
}

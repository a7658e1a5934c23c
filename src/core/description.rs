//! AI-written menu descriptions.
//!
//! The generation itself is an external collaborator behind the
//! [`DescriptionGenerator`] trait. [`OpenRouterGenerator`] talks to an
//! OpenAI-compatible `chat/completions` endpoint.

use crate::core::error::Error;
use crate::core::types::FieldErrors;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Message shown for any generation failure; details stay in the log
pub const GENERATION_FAILED: &str = "Failed to generate description. Please try again.";

const MIN_FIELD_LEN: usize = 3;
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Ingredients and style of the item to describe
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DescriptionRequest {
    pub ingredients: String,
    pub style: String,
}

impl DescriptionRequest {
    pub fn new(ingredients: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            style: style.into(),
        }
    }

    /// Checks both fields are at least three characters long
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.ingredients.trim().chars().count() < MIN_FIELD_LEN {
            errors
                .entry("ingredients".to_string())
                .or_default()
                .push("Please list at least one ingredient.".to_string());
        }
        if self.style.trim().chars().count() < MIN_FIELD_LEN {
            errors
                .entry("style".to_string())
                .or_default()
                .push("Please describe the style.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copywriter prompt sent to the model
    pub fn prompt(&self) -> String {
        format!(
            "You are a creative copywriter specializing in writing descriptions for menu items.\n\n\
             Based on the ingredients and style, generate an enticing and descriptive menu item description.\n\n\
             Ingredients: {}\n\
             Style: {}\n\n\
             Description: ",
            self.ingredients.trim(),
            self.style.trim()
        )
    }
}

/// Produces a description for a validated request
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String>;
}

/// Result of one generation attempt as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptionOutcome {
    /// The generated text
    Generated(String),
    /// Input rejected before any call was made
    Invalid(FieldErrors),
    /// The provider failed; carries the generic user-facing message
    Failed(String),
}

/// Validates the request, then asks the generator once.
///
/// No retry and no timeout policy: a failure is logged and reduced to
/// [`GENERATION_FAILED`].
pub async fn create_ai_description<G>(generator: &G, request: &DescriptionRequest) -> DescriptionOutcome
where
    G: DescriptionGenerator + ?Sized,
{
    if let Err(errors) = request.validate() {
        return DescriptionOutcome::Invalid(errors);
    }

    match generator.generate(request).await {
        Ok(description) => DescriptionOutcome::Generated(description),
        Err(e) => {
            log::warn!("Description generation failed: {}", e);
            DescriptionOutcome::Failed(GENERATION_FAILED.to_string())
        }
    }
}

/// Generator backed by the OpenRouter chat completions API
pub struct OpenRouterGenerator {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterGenerator {
    /// Creates a generator with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Points the generator at another OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_body(&self, request: &DescriptionRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": request.prompt() }
            ]
        })
    }
}

/// Pulls the first choice's text out of a chat completions response
pub fn parse_completion(body: &Value) -> Result<String> {
    let content = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::trim)
        .ok_or_else(|| Error::Generation("Response has no message content".into()))?;

    if content.is_empty() {
        return Err(Error::Generation("Model returned an empty description".into()));
    }
    Ok(content.to_string())
}

#[async_trait]
impl DescriptionGenerator for OpenRouterGenerator {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String> {
        log::debug!("Requesting description from {} via {}", self.model, self.base_url);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(Error::Generation(format!(
                "{} - {}",
                status.as_u16(),
                message
            )));
        }

        parse_completion(&body)
    }
}

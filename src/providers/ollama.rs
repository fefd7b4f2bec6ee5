use crate::config::OllamaConfig;
use crate::error::{PlannerError, RequestError};
use crate::providers::LlmProvider;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

pub const GENERATE_PATH: &str = "/api/generate";
pub const TAGS_PATH: &str = "/api/tags";

/// Request body of Ollama's generate API
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    num_predict: u32,
    timeout: Duration,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: &OllamaConfig) -> Result<Self, PlannerError> {
        Self::with_settings(
            config.base_url.clone(),
            config.model.clone(),
            config.temperature,
            config.num_predict,
            Duration::from_secs(config.timeout),
        )
    }

    pub(crate) fn with_settings(
        base_url: String,
        model: String,
        temperature: f32,
        num_predict: u32,
        timeout: Duration,
    ) -> Result<Self, PlannerError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(OllamaProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
            num_predict,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the server which models it has pulled.
    ///
    /// Used for diagnostics only; a failed check is never retried.
    pub fn list_models(&self) -> Result<Vec<String>, RequestError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, TAGS_PATH))
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(RequestError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let tags: Value = serde_json::from_str(&body)
            .map_err(|e| RequestError::Unexpected(format!("invalid JSON from Ollama: {}", e)))?;

        Ok(tags["models"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m["name"].as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Whether the configured model shows up in [`OllamaProvider::list_models`].
    ///
    /// An untagged `llama3.2` matches any pulled tag; `llama3.2:70b` only matches itself.
    pub fn has_model(&self) -> Result<bool, RequestError> {
        let models = self.list_models()?;
        if self.model.contains(':') {
            return Ok(models.iter().any(|m| *m == self.model));
        }
        let prefix = format!("{}:", self.model);
        Ok(models
            .iter()
            .any(|m| *m == self.model || m.starts_with(&prefix)))
    }

    fn classify(&self, err: reqwest::Error) -> RequestError {
        // A connect timeout is still a timeout
        if err.is_timeout() {
            RequestError::Timeout(self.timeout)
        } else if err.is_connect() {
            RequestError::ConnectionRefused(self.base_url.clone())
        } else {
            RequestError::Unexpected(err.to_string())
        }
    }
}

impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn generate(&self, prompt: &str) -> Result<String, RequestError> {
        let start = Instant::now();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
        };

        debug!("POST {}{} with model {}", self.base_url, GENERATE_PATH, self.model);
        let response = self
            .client
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .json(&request)
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.classify(e))?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if status != StatusCode::OK {
            return Err(RequestError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = serde_json::from_str(&body)
            .map_err(|e| RequestError::Unexpected(format!("invalid JSON from Ollama: {}", e)))?;
        debug!(
            "Ollama answered in {}ms (model: {:?}, eval_count: {:?})",
            latency_ms,
            response_body["model"].as_str(),
            response_body["eval_count"].as_u64()
        );

        let text = response_body["response"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(RequestError::EmptyGeneration)?;

        info!("Generated a recipe in {}ms", latency_ms);
        Ok(text.to_string())
    }
}

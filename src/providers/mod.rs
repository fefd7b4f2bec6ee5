mod ollama;
mod prompt;

pub use ollama::{OllamaProvider, GENERATE_PATH, TAGS_PATH};
pub use prompt::{inject_ingredients, RECIPE_PROMPT};

use crate::error::RequestError;

/// Seam between the requester and whatever produces text from a prompt
pub trait LlmProvider {
    /// Get the provider name (e.g., "ollama")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the generated text, trimmed and non-empty
    fn generate(&self, prompt: &str) -> Result<String, RequestError>;
}

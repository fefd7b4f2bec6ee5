use log::debug;
use std::time::Duration;

use crate::config::{
    default_base_url, default_model, default_num_predict, default_temperature, default_timeout,
    OllamaConfig,
};
use crate::error::PlannerError;
use crate::model::{IngredientQuery, RecipeResult};
use crate::providers::{inject_ingredients, LlmProvider, OllamaProvider};

/// Asks a language model for one recipe per call
pub struct RecipeRequester {
    provider: Box<dyn LlmProvider>,
}

impl RecipeRequester {
    /// Creates a new builder, preloaded with the default Ollama settings
    ///
    /// # Example
    /// ```
    /// use fridge_chef::RecipeRequester;
    ///
    /// let requester = RecipeRequester::builder().model("mistral").build();
    /// assert!(requester.is_ok());
    /// ```
    pub fn builder() -> RecipeRequesterBuilder {
        RecipeRequesterBuilder::default()
    }

    /// Wrap an already constructed provider
    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        RecipeRequester { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Request one recipe for the given ingredients.
    ///
    /// Issues exactly one call to the provider and never retries. Every error is
    /// folded into [`RecipeResult::Failure`].
    pub fn request_recipe(&self, ingredients: &IngredientQuery) -> RecipeResult {
        let prompt = inject_ingredients(ingredients.as_str());
        debug!(
            "Requesting recipe from {} for: {}",
            self.provider.provider_name(),
            ingredients
        );
        self.provider.generate(&prompt).into()
    }
}

/// Builder for configuring a [`RecipeRequester`]
#[derive(Debug, Default)]
pub struct RecipeRequesterBuilder {
    base_url: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    num_predict: Option<u32>,
    timeout: Option<Duration>,
}

impl RecipeRequesterBuilder {
    /// Take every setting from a loaded configuration
    pub fn from_config(mut self, config: &OllamaConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.model = Some(config.model.clone());
        self.temperature = Some(config.temperature);
        self.num_predict = Some(config.num_predict);
        self.timeout = Some(Duration::from_secs(config.timeout));
        self
    }

    /// Set the server address, e.g. `http://localhost:11434`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    /// Set a timeout for the whole request
    ///
    /// # Example
    /// ```
    /// use fridge_chef::RecipeRequester;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeRequester::builder().timeout(Duration::from_secs(90));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the requester
    ///
    /// # Errors
    /// Returns `PlannerError` if:
    /// - The model name is empty
    /// - The timeout is zero
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeRequester, PlannerError> {
        let model = self.model.unwrap_or_else(default_model);
        if model.trim().is_empty() {
            return Err(PlannerError::BuilderError(
                "Model name cannot be empty".to_string(),
            ));
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(default_timeout()));
        if timeout.is_zero() {
            return Err(PlannerError::BuilderError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let provider = OllamaProvider::with_settings(
            self.base_url.unwrap_or_else(default_base_url),
            model,
            self.temperature.unwrap_or_else(default_temperature),
            self.num_predict.unwrap_or_else(default_num_predict),
            timeout,
        )?;

        Ok(RecipeRequester::with_provider(Box::new(provider)))
    }
}

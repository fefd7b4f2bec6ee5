//! Turn the ingredients in your fridge into a recipe using a local Ollama model.
//!
//! ```no_run
//! use fridge_chef::{collector, RecipeRequester};
//!
//! # fn main() -> Result<(), fridge_chef::PlannerError> {
//! let requester = RecipeRequester::builder().build()?;
//! if let Some(query) = collector::collect("eggs, spinach, cheese") {
//!     println!("{}", requester.request_recipe(&query));
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod providers;
pub mod session;

pub use builder::{RecipeRequester, RecipeRequesterBuilder};
pub use config::{OllamaConfig, PlannerConfig};
pub use error::{PlannerError, RequestError};
pub use model::{FailureKind, IngredientQuery, RecipeResult, RequestState, ERROR_MARKER};
pub use session::Session;

/// Request a recipe with settings from `config.toml` and the environment.
///
/// Configuration problems surface as `Err`; everything that goes wrong during
/// the request itself is reported inside the `RecipeResult`.
pub fn request_recipe(ingredients: &IngredientQuery) -> Result<RecipeResult, PlannerError> {
    let config = PlannerConfig::load()?;
    let requester = RecipeRequester::builder()
        .from_config(&config.ollama)
        .build()?;
    Ok(requester.request_recipe(ingredients))
}

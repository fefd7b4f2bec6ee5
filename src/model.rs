use std::fmt;

use crate::error::RequestError;

/// Prefix used when rendering a failed request, so it can't be mistaken for a recipe
pub const ERROR_MARKER: &str = "Error: ";

/// Raw ingredient text as typed by the user.
///
/// Only non-empty input becomes a query. The text is kept exactly as entered,
/// commas and surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery(String);

impl IngredientQuery {
    /// Returns `None` when the input is empty or whitespace only
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(IngredientQuery(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flat category of a failed recipe request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ServerError,
    EmptyGeneration,
    ConnectionRefused,
    Timeout,
    Unexpected,
}

/// Outcome of a single recipe request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeResult {
    /// Recipe text, trimmed of surrounding whitespace
    Success(String),
    /// A user-displayable failure
    Failure { kind: FailureKind, message: String },
}

impl RecipeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RecipeResult::Success(_))
    }

    /// Failure category, `None` on success
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            RecipeResult::Success(_) => None,
            RecipeResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Recipe text, `None` on failure
    pub fn text(&self) -> Option<&str> {
        match self {
            RecipeResult::Success(text) => Some(text),
            RecipeResult::Failure { .. } => None,
        }
    }
}

impl From<RequestError> for RecipeResult {
    fn from(err: RequestError) -> Self {
        RecipeResult::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<Result<String, RequestError>> for RecipeResult {
    fn from(result: Result<String, RequestError>) -> Self {
        match result {
            Ok(text) => RecipeResult::Success(text),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for RecipeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeResult::Success(text) => f.write_str(text),
            RecipeResult::Failure { message, .. } => write!(f, "{}{}", ERROR_MARKER, message),
        }
    }
}

/// Where a single user action is in its lifecycle.
///
/// `Done` is terminal; a new action starts again from `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Requesting,
    Done(RecipeResult),
}

impl RequestState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Done(_))
    }

    pub fn result(&self) -> Option<&RecipeResult> {
        match self {
            RequestState::Done(result) => Some(result),
            _ => None,
        }
    }
}

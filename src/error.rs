// error.rs
use thiserror::Error;

/// Every way a recipe request can fail. The user only ever sees
/// [`RecipeError::USER_MESSAGE`]; the variants exist for the logs.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe service unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("recipe service answered {0}")]
    Status(reqwest::StatusCode),

    #[error("could not read recipe payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RecipeError {
    pub const USER_MESSAGE: &'static str = "No recipe found for this mood - try another mood!";
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("mood must not be empty")]
pub struct InvalidMood;

/// Startup failures; reported by `main` before exiting.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("could not build http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("server io failed: {0}")]
    Io(#[from] std::io::Error),
}

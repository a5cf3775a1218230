use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default model identifier; vision-capable, so both pipeline stages share it.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration parameters for the remote generative model
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct ModelParams {
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[builder(setter(into), default = String::from(DEFAULT_MODEL))]
    pub model: String,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Returns one raw completion for the given input text. No structure is
    /// guaranteed; normalization happens downstream.
    async fn summarize(&self, text: &str) -> AppResult<String>;
}

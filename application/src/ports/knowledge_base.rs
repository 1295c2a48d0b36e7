//! Knowledge-base port
//!
//! Encyclopedic search used by the food tool.

use async_trait::async_trait;
use concierge_domain::Article;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    /// The title names several pages; `options` lists their titles.
    #[error("\"{title}\" may refer to: {}", options.join(", "))]
    Disambiguation { title: String, options: Vec<String> },

    #[error("{0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Titles matching `query`, best match first, at most `limit`
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, KnowledgeBaseError>;

    /// Plain-text page for an exact title
    async fn fetch(&self, title: &str) -> Result<Article, KnowledgeBaseError>;
}

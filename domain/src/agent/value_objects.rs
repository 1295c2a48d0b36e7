//! Agent value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject an agent answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Weather,
    Food,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Weather => "weather",
            Topic::Food => "food",
        }
    }

    /// Heading of this topic's section in a combined answer
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Weather => "天気情報",
            Topic::Food => "料理情報",
        }
    }

    /// Leading text of a failure message
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Topic::Weather => "天気情報の取得に失敗しました",
            Topic::Food => "料理情報の取得に失敗しました",
        }
    }

    /// Query handed to the topic's agent for a city
    pub fn synthesized_query(&self, city: &str) -> String {
        match self {
            Topic::Weather => format!("{}の天気を教えてください", city),
            Topic::Food => format!("{}の料理情報を教えてください", city),
        }
    }

    /// Render one section of a combined answer
    pub fn section(&self, body: &str) -> String {
        format!("{}:\n{}", self.label(), body)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one agent invocation. Exactly one of answer or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Answer(String),
    Failure { topic: Topic, message: String },
}

impl QueryResult {
    pub fn failure(topic: Topic, message: impl Into<String>) -> Self {
        QueryResult::Failure {
            topic,
            message: message.into(),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, QueryResult::Answer(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, QueryResult::Failure { .. })
    }

    /// User-facing text
    pub fn into_text(self) -> String {
        match self {
            QueryResult::Answer(text) => text,
            failure => failure.to_string(),
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Answer(text) => write!(f, "{}", text),
            QueryResult::Failure { topic, message } => {
                write!(f, "{}: {}", topic.failure_prefix(), message)
            }
        }
    }
}

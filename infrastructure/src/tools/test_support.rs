//! Scripted ports shared by the tool tests.

use async_trait::async_trait;
use concierge_application::ports::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use concierge_application::ports::llm_gateway::{GatewayError, LlmGateway};
use concierge_application::ports::weather_provider::{ProviderError, WeatherProvider};
use concierge_domain::{Article, Message, ModelParams, WeatherReport};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Gateway answering with queued assistant texts
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<String>>,
    params: Mutex<Vec<ModelParams>>,
}

impl ScriptedGateway {
    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            params: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.params.lock().unwrap().len()
    }

    pub fn last_params(&self) -> Option<ModelParams> {
        self.params.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        _messages: &[Message],
        _tools: &[serde_json::Value],
        params: &ModelParams,
    ) -> Result<Message, GatewayError> {
        self.params.lock().unwrap().push(params.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .map(Message::assistant)
            .ok_or_else(|| GatewayError::Other("No more responses".to_string()))
    }
}

/// Weather provider with one fixed answer, recording the cities it was asked for
pub struct FixedWeather {
    result: Result<WeatherReport, ProviderError>,
    cities: Mutex<Vec<String>>,
}

impl FixedWeather {
    pub fn new(result: Result<WeatherReport, ProviderError>) -> Self {
        Self {
            result,
            cities: Mutex::new(Vec::new()),
        }
    }

    pub fn cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for FixedWeather {
    async fn current(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        self.cities.lock().unwrap().push(city.to_string());
        self.result.clone()
    }
}

/// In-memory knowledge base
#[derive(Default)]
pub struct FakeKnowledgeBase {
    search_results: HashMap<String, Vec<String>>,
    pages: HashMap<String, Result<Article, KnowledgeBaseError>>,
    searches: Mutex<Vec<String>>,
    fetches: Mutex<Vec<String>>,
}

impl FakeKnowledgeBase {
    pub fn with_search(mut self, query: &str, titles: &[&str]) -> Self {
        self.search_results.insert(
            query.to_string(),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn with_page(mut self, title: &str, page: Result<Article, KnowledgeBaseError>) -> Self {
        self.pages.insert(title.to_string(), page);
        self
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeBase for FakeKnowledgeBase {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, KnowledgeBaseError> {
        self.searches.lock().unwrap().push(query.to_string());
        Ok(self
            .search_results
            .get(query)
            .map(|titles| titles.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch(&self, title: &str) -> Result<Article, KnowledgeBaseError> {
        self.fetches.lock().unwrap().push(title.to_string());
        self.pages.get(title).cloned().unwrap_or_else(|| {
            Err(KnowledgeBaseError::NotFound(format!(
                "Page id \"{}\" does not match any pages",
                title
            )))
        })
    }
}

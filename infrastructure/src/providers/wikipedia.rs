//! Wikipedia client over the MediaWiki Action API
//!
//! `fetch` resolves redirects and reports disambiguation pages as
//! [`KnowledgeBaseError::Disambiguation`] carrying the linked titles.

use async_trait::async_trait;
use concierge_application::ports::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use concierge_domain::Article;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Outcome of a page lookup
#[derive(Debug, PartialEq)]
enum PageLookup {
    Found(Article),
    Disambiguation(String),
    Missing,
}

pub struct WikipediaClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikipediaClient {
    /// Client for `https://{lang}.wikipedia.org`
    pub fn for_language(lang: &str, timeout: Duration) -> Result<Self, KnowledgeBaseError> {
        Self::new(format!("https://{}.wikipedia.org/w/api.php", lang), timeout)
    }

    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, KnowledgeBaseError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("city-concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KnowledgeBaseError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<Value, KnowledgeBaseError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| KnowledgeBaseError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(KnowledgeBaseError::Request(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| KnowledgeBaseError::InvalidResponse(e.to_string()))?;

        if let Some(info) = body["error"]["info"].as_str() {
            return Err(KnowledgeBaseError::Request(info.to_string()));
        }
        Ok(body)
    }

    async fn links(&self, title: &str) -> Result<Vec<String>, KnowledgeBaseError> {
        let body = self
            .query(&[
                ("prop", "links"),
                ("titles", title),
                ("plnamespace", "0"),
                ("pllimit", "max"),
                ("redirects", "1"),
            ])
            .await?;
        Ok(parse_links(&body))
    }
}

#[async_trait]
impl KnowledgeBase for WikipediaClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, KnowledgeBaseError> {
        debug!("Wikipedia search: {} (limit {})", query, limit);
        let limit = limit.to_string();
        let body = self
            .query(&[
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await?;
        Ok(parse_search(&body))
    }

    async fn fetch(&self, title: &str) -> Result<Article, KnowledgeBaseError> {
        debug!("Wikipedia fetch: {}", title);
        let body = self
            .query(&[
                ("prop", "extracts|pageprops|info"),
                ("titles", title),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
            ])
            .await?;

        match parse_page(&body)? {
            PageLookup::Found(article) => Ok(article),
            PageLookup::Missing => Err(KnowledgeBaseError::NotFound(format!(
                "Page id \"{}\" does not match any pages",
                title
            ))),
            PageLookup::Disambiguation(resolved) => {
                let options = self.links(&resolved).await?;
                Err(KnowledgeBaseError::Disambiguation {
                    title: resolved,
                    options,
                })
            }
        }
    }
}

fn parse_search(body: &Value) -> Vec<String> {
    body["query"]["search"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .filter_map(|r| r["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_page(body: &Value) -> Result<PageLookup, KnowledgeBaseError> {
    let page = body["query"]["pages"]
        .as_array()
        .and_then(|pages| pages.first())
        .ok_or_else(|| KnowledgeBaseError::InvalidResponse("no pages in response".to_string()))?;

    if page["missing"].as_bool().unwrap_or(false) || page["invalid"].as_bool().unwrap_or(false) {
        return Ok(PageLookup::Missing);
    }

    let title = page["title"]
        .as_str()
        .ok_or_else(|| KnowledgeBaseError::InvalidResponse("page has no title".to_string()))?
        .to_string();

    if !page["pageprops"]["disambiguation"].is_null() {
        return Ok(PageLookup::Disambiguation(title));
    }

    let content = page["extract"].as_str().unwrap_or_default().to_string();
    let url = page["fullurl"].as_str().unwrap_or_default().to_string();
    Ok(PageLookup::Found(Article { title, content, url }))
}

fn parse_links(body: &Value) -> Vec<String> {
    body["query"]["pages"]
        .as_array()
        .and_then(|pages| pages.first())
        .and_then(|page| page["links"].as_array())
        .map(|links| {
            links
                .iter()
                .filter_map(|l| l["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

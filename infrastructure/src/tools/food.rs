//! `get_food_info` tool
//!
//! Looks up a city's cuisine in the knowledge base:
//!
//! 1. Search `"{city} cuisine"`, `"{city} food"`, `"{city} specialty"` and
//!    `"{city} local food"`, three titles each, keeping the first occurrence
//!    of every title
//! 2. Prefer a title containing a food keyword, else take the first
//! 3. Fetch it, keep the first 500 characters and narrow them to the
//!    food-related lines when there are any
//!
//! A disambiguation page is resolved once by picking one of its options.

use async_trait::async_trait;
use concierge_application::ports::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use concierge_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::Tool,
    value_objects::{ToolError, ToolOutput},
};
use concierge_domain::util::truncate_chars;
use concierge_domain::Article;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::localize::CityLocalizer;

/// Tool name constant
pub const GET_FOOD_INFO: &str = "get_food_info";

const SEARCH_SUFFIXES: [&str; 4] = ["cuisine", "food", "specialty", "local food"];
const RESULTS_PER_SEARCH: usize = 3;
const MAX_CONTENT_CHARS: usize = 500;

/// Keywords marking a title as food-related
const TITLE_KEYWORDS: [&str; 3] = ["料理", "名物", "郷土料理"];
/// Keywords starting a food-related section of page content
const SECTION_KEYWORDS: [&str; 5] = ["料理", "名物", "郷土料理", "特産", "食"];

pub fn get_food_info_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_FOOD_INFO,
        "Get information about the local cuisine and specialties of a city from Wikipedia.",
    )
    .with_parameter(ToolParameter::new("city", "Name of the city", true))
}

pub struct FoodTool {
    definition: ToolDefinition,
    localizer: Arc<CityLocalizer>,
    knowledge_base: Arc<dyn KnowledgeBase>,
}

impl FoodTool {
    pub fn new(localizer: Arc<CityLocalizer>, knowledge_base: Arc<dyn KnowledgeBase>) -> Self {
        Self {
            definition: get_food_info_definition(),
            localizer,
            knowledge_base,
        }
    }

    async fn search_titles(&self, city: &str) -> Result<Vec<String>, ToolError> {
        let mut titles: Vec<String> = Vec::new();
        for suffix in SEARCH_SUFFIXES {
            let query = format!("{} {}", city, suffix);
            let results = self
                .knowledge_base
                .search(&query, RESULTS_PER_SEARCH)
                .await
                .map_err(unexpected)?;
            for title in results {
                if !titles.contains(&title) {
                    titles.push(title);
                }
            }
        }
        debug!("Search results: {:?}", titles);
        Ok(titles)
    }

    async fn resolve_disambiguation(&self, options: &[String]) -> Result<Article, ToolError> {
        let option = pick_food_title(options).ok_or_else(|| {
            ToolError::Food("ページの取得に失敗しました: 候補がありません".to_string())
        })?;
        info!("Resolving disambiguation with: {}", option);

        let article = self
            .knowledge_base
            .fetch(option)
            .await
            .map_err(|e| ToolError::Food(format!("ページの取得に失敗しました: {}", e)))?;

        Ok(Article {
            content: truncate_chars(&article.content, MAX_CONTENT_CHARS).to_string(),
            ..article
        })
    }
}

#[async_trait]
impl Tool for FoodTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let city = call.require_string("city").map_err(ToolError::Food)?;
        info!("Getting food info for city: {}", city);

        let english = self
            .localizer
            .to_english(city)
            .await
            .map_err(|e| ToolError::Food(format!("都市名の変換に失敗しました: {}", e)))?;

        let titles = self.search_titles(&english).await?;
        let Some(selected) = pick_food_title(&titles) else {
            warn!("No search results found for {}", english);
            return Err(ToolError::Food("料理情報が見つかりませんでした。".to_string()));
        };
        info!("Selected page: {}", selected);

        let article = match self.knowledge_base.fetch(selected).await {
            Ok(article) => {
                let content = truncate_chars(&article.content, MAX_CONTENT_CHARS);
                Article {
                    content: food_sections(content),
                    ..article
                }
            }
            Err(KnowledgeBaseError::Disambiguation { options, .. }) => {
                warn!("Disambiguation page: {}", selected);
                self.resolve_disambiguation(&options).await?
            }
            Err(KnowledgeBaseError::NotFound(message)) => {
                return Err(ToolError::Food(format!(
                    "ページが見つかりませんでした: {}",
                    message
                )));
            }
            Err(e) => return Err(unexpected(e)),
        };

        Ok(json!({
            "title": article.title,
            "content": article.content,
            "url": article.url,
        }))
    }
}

fn unexpected(e: KnowledgeBaseError) -> ToolError {
    ToolError::Food(format!("予期せぬエラーが発生しました: {}", e))
}

/// First title containing a food keyword, else the first title
fn pick_food_title(titles: &[String]) -> Option<&String> {
    titles
        .iter()
        .find(|t| TITLE_KEYWORDS.iter().any(|k| t.contains(k)))
        .or_else(|| titles.first())
}

/// Lines from a keyword line up to the next keyword line form a section.
/// Returns the joined sections, or `content` when no line matches.
fn food_sections(content: &str) -> String {
    let mut sections: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in content.split('\n') {
        if SECTION_KEYWORDS.iter().any(|k| line.contains(k)) {
            sections.extend(current.take());
            current = Some(line.to_string());
        } else if let Some(section) = current.as_mut() {
            section.push('\n');
            section.push_str(line);
        }
    }
    sections.extend(current);

    if sections.is_empty() {
        content.to_string()
    } else {
        sections.join("\n")
    }
}

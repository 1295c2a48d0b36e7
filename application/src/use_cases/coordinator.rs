//! Coordinator use case.
//!
//! Routes a query to the topic agents by keyword and merges their sections.
//!
//! # Flow
//!
//! 1. Extract the city ([`CityExtractor`], never fails)
//! 2. Match the weather and food keyword sets against the raw query
//! 3. Run each matched agent in turn, weather first, with a query built
//!    from the city
//! 4. Join the labelled sections with a blank line
//!
//! A failing agent only affects its own section. When no keyword matches, a
//! fixed message is returned and no agent runs.

use crate::config::RoutingConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::extract_city::CityExtractor;
use crate::use_cases::run_agent::Agent;
use concierge_domain::prompt::FALLBACK_MESSAGE;
use concierge_domain::util::truncate_str;
use concierge_domain::{QueryResult, Topic};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Coordinator {
    weather_agent: Arc<Agent>,
    food_agent: Arc<Agent>,
    city_extractor: CityExtractor,
    routing: RoutingConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Coordinator {
    pub fn new(
        weather_agent: Arc<Agent>,
        food_agent: Arc<Agent>,
        city_extractor: CityExtractor,
        routing: RoutingConfig,
    ) -> Self {
        Self {
            weather_agent,
            food_agent,
            city_extractor,
            routing,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    fn agent(&self, topic: Topic) -> &Agent {
        match topic {
            Topic::Weather => &self.weather_agent,
            Topic::Food => &self.food_agent,
        }
    }

    /// Answer `query`. Always returns user-facing text.
    pub async fn process_query(&self, query: &str) -> String {
        info!("Processing query: {}", truncate_str(query, 100));
        self.conversation_logger.log(ConversationEvent::new(
            "query_received",
            json!({ "query": query }),
        ));

        let city = self
            .city_extractor
            .extract(query, &self.routing.default_city)
            .await;
        info!("Extracted city: {}", city);
        self.conversation_logger.log(ConversationEvent::new(
            "city_extracted",
            json!({ "city": city }),
        ));

        let topics = self.routing.matched_topics(query);
        self.conversation_logger.log(ConversationEvent::new(
            "route",
            json!({
                "city": city,
                "topics": topics.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
            }),
        ));

        if topics.is_empty() {
            warn!("No specific information requested");
            return FALLBACK_MESSAGE.to_string();
        }

        let mut sections = Vec::with_capacity(topics.len());
        for topic in topics {
            info!("{} information requested", topic);
            let result = self
                .agent(topic)
                .process_query(&topic.synthesized_query(&city))
                .await;
            if let QueryResult::Failure { message, .. } = &result {
                warn!("{} section failed: {}", topic, message);
            }
            sections.push(topic.section(&result.into_text()));
        }

        sections.join("\n\n")
    }
}

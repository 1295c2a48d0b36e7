//! CLI entrypoint for City Concierge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use concierge_application::{
    Agent, CityExtractor, ConversationLogger, Coordinator, KnowledgeBase, LlmGateway,
    NoConversationLogger, ToolExecutorPort, ToolSchemaPort,
};
use concierge_domain::{AgentConfig, ModelParams, PromptTemplate, Topic};
use concierge_infrastructure::tools::{food::GET_FOOD_INFO, weather::GET_WEATHER};
use concierge_infrastructure::{
    CityLocalizer, ConfigLoader, FileConfig, FoodTool, JsonSchemaToolConverter,
    JsonlConversationLogger, OpenAiGateway, OpenWeatherClient, ToolRegistry, WeatherTool,
    WikipediaClient,
};
use concierge_presentation::{ChatRepl, Cli};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Held until main returns so buffered file logs are flushed
    let _log_guard = init_tracing(&cli, &config.logging.log_dir)?;

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|e| format!("  - {}", e)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    info!("Starting City Concierge");

    let coordinator = Arc::new(build_coordinator(&config)?);
    let repl = ChatRepl::new(coordinator).with_progress(!cli.quiet);

    match cli.question.as_deref() {
        Some(question) if !cli.is_interactive() => repl.answer(question).await,
        _ => repl.run().await?,
    }

    Ok(())
}

fn init_tracing(cli: &Cli, log_dir: &Path) -> Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("concierge.log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log directory {}", log_dir.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

fn build_coordinator(config: &FileConfig) -> Result<Coordinator> {
    let providers = &config.providers;
    let models = &config.models;

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(
        OpenAiGateway::from_env(
            providers.openai.base_url.clone(),
            &providers.openai.api_key_env,
            providers.openai.timeout(),
        )
        .context("Failed to set up the OpenAI client")?,
    );

    let weather_provider = OpenWeatherClient::new(
        providers.openweather.base_url.clone(),
        providers.openweather.api_key_env.clone(),
        providers.openweather.timeout(),
    )?
    .with_units(providers.openweather.units.clone())
    .with_lang(providers.openweather.lang.clone());

    let knowledge_base: Arc<dyn KnowledgeBase> = match &providers.wikipedia.api_url {
        Some(url) => Arc::new(WikipediaClient::new(
            url.clone(),
            providers.wikipedia.timeout(),
        )?),
        None => Arc::new(WikipediaClient::for_language(
            &providers.wikipedia.lang,
            providers.wikipedia.timeout(),
        )?),
    };

    let localizer =
        Arc::new(CityLocalizer::new(gateway.clone()).with_model(models.localizer_model()));

    let tools: Arc<dyn ToolExecutorPort> = Arc::new(
        ToolRegistry::new()
            .register(WeatherTool::new(
                localizer.clone(),
                Arc::new(weather_provider),
            ))
            .register(FoodTool::new(localizer, knowledge_base)),
    );
    let schema: Arc<dyn ToolSchemaPort> = Arc::new(JsonSchemaToolConverter);

    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .logging
        .conversation_log_path()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let agent = |topic: Topic, tool: &str, params: ModelParams| {
        let config = AgentConfig::new(topic, PromptTemplate::agent_system(topic))
            .with_params(params)
            .with_tool(tool);
        Arc::new(
            Agent::new(config, gateway.clone(), tools.clone(), schema.clone())
                .with_conversation_logger(conversation_logger.clone()),
        )
    };
    let weather_agent = agent(Topic::Weather, GET_WEATHER, models.weather_params());
    let food_agent = agent(Topic::Food, GET_FOOD_INFO, models.food_params());

    let routing = config.router.to_routing_config();
    let extractor = CityExtractor::new(gateway.clone()).with_model(models.extractor_model());

    Ok(Coordinator::new(weather_agent, food_agent, extractor, routing)
        .with_conversation_logger(conversation_logger))
}

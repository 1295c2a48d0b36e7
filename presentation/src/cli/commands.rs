//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for city-concierge
#[derive(Parser, Debug)]
#[command(name = "city-concierge")]
#[command(author, version, about = "Ask about the weather and local food of a city")]
#[command(long_about = r#"
City Concierge answers questions about a city's weather and its local food.

Each question is routed by keyword to a weather agent, a food agent, or both.
The agents call OpenWeatherMap and Wikipedia through OpenAI tool calling.

Configuration files are loaded from (in priority order):
1. CONCIERGE_* environment variables
2. --config <path>      Explicit config file
3. ./concierge.toml     Project-level config
4. ~/.config/city-concierge/config.toml   Global config

API keys are read from OPEN_AI_KEY and OPENWEATHER_KEY (a .env file works too).

Example:
  city-concierge "大阪の天気を教えて"
  city-concierge "京都の名物料理と天気は？"
  city-concierge --chat
"#)]
pub struct Cli {
    /// The question to answer (interactive chat when omitted)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to enter the interactive loop rather than answer once.
    pub fn is_interactive(&self) -> bool {
        self.chat || self.question.is_none()
    }

    /// Tracing filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ```toml
/// [logging]
/// log_dir = "logs"           # daily-rolling concierge.log.YYYY-MM-DD
/// conversation_log = true    # also write conversation.jsonl there
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub log_dir: PathBuf,
    pub conversation_log: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            conversation_log: true,
        }
    }
}

impl FileLoggingConfig {
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log
            .then(|| self.log_dir.join("conversation.jsonl"))
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use concierge_application::Coordinator;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatInput<'a> {
    Quit,
    Skip,
    Question(&'a str),
}

impl<'a> ChatInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Skip;
        }
        match line.to_lowercase().as_str() {
            "quit" | "exit" | "/quit" | "/exit" => Self::Quit,
            _ => Self::Question(line),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    coordinator: Arc<Coordinator>,
    progress: ProgressReporter,
}

impl ChatRepl {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self {
            coordinator,
            progress: ProgressReporter::default(),
        }
    }

    /// Set whether to show the waiting spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = ProgressReporter::new(show);
        self
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("city-concierge").join("history.txt"))
    }

    /// Create the directory holding `path`. Failures are logged, not fatal.
    fn prepare_history_dir(path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return true;
        };
        match std::fs::create_dir_all(parent) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Could not create history directory {}: {}",
                    parent.display(),
                    e
                );
                false
            }
        }
    }

    fn editor() -> Reedline {
        let editor = Reedline::create();
        let Some(path) = Self::history_path() else {
            return editor;
        };
        if !Self::prepare_history_dir(&path) {
            return editor;
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Chat history unavailable: {}", e);
                editor
            }
        }
    }

    /// Run the interactive REPL until the user quits or input ends.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = Self::editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("質問".to_string()),
            DefaultPromptSegment::Empty,
        );

        println!(
            "{}",
            ConsoleFormatter::welcome(&self.coordinator.routing().default_city)
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match ChatInput::parse(&line) {
                    ChatInput::Quit => {
                        println!("{}", ConsoleFormatter::goodbye());
                        break;
                    }
                    ChatInput::Skip => continue,
                    ChatInput::Question(question) => self.answer(question).await,
                },
                Signal::CtrlC => {
                    debug!("Line cancelled");
                    continue;
                }
                _ => {
                    println!("{}", ConsoleFormatter::goodbye());
                    break;
                }
            }
        }

        Ok(())
    }

    /// Answer a single question and print it.
    pub async fn answer(&self, question: &str) {
        let spinner = self.progress.start("考え中...");
        let answer = self.coordinator.process_query(question).await;
        self.progress.finish(spinner);

        println!("{}", ConsoleFormatter::format_answer(&answer));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("city-concierge/history.txt");
        assert!(ChatRepl::prepare_history_dir(&path));
        assert!(dir.path().join("city-concierge").is_dir());
    }

    #[test]
    fn test_history_dir_failure_is_reported() {
        // A regular file cannot hold a directory
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().join("sub/history.txt");
        assert!(!ChatRepl::prepare_history_dir(&path));
    }

    #[test]
    fn test_quit_words() {
        for line in ["quit", "exit", "/quit", " QUIT ", "Exit"] {
            assert_eq!(ChatInput::parse(line), ChatInput::Quit, "{line}");
        }
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(ChatInput::parse(""), ChatInput::Skip);
        assert_eq!(ChatInput::parse("   \t"), ChatInput::Skip);
    }

    #[test]
    fn test_question_is_trimmed() {
        assert_eq!(
            ChatInput::parse("  札幌の天気は？ "),
            ChatInput::Question("札幌の天気は？")
        );
    }

    #[test]
    fn test_quit_inside_sentence_is_a_question() {
        assert_eq!(
            ChatInput::parse("quit smoking food"),
            ChatInput::Question("quit smoking food")
        );
    }
}

//! Console output formatter for concierge answers

use colored::Colorize;

/// Label printed before every answer.
pub const ANSWER_LABEL: &str = "回答:";

/// Formats answers and chat chrome for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `回答: <text>`, with the label highlighted.
    pub fn format_answer(answer: &str) -> String {
        format!("{} {}", ANSWER_LABEL.cyan().bold(), answer)
    }

    /// Banner shown when the chat starts.
    pub fn welcome(default_city: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│           City Concierge - Chat Mode        │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str("天気や名物料理について質問してください。\n");
        output.push_str(&format!(
            "{} {}\n",
            "都市の指定がない場合:".dimmed(),
            default_city
        ));
        output.push('\n');
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  quit, exit, /quit  - Exit chat\n");
        output
    }

    pub fn goodbye() -> &'static str {
        "Bye!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_has_label_and_text() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_answer("東京は晴れです。"),
            "回答: 東京は晴れです。"
        );
    }

    #[test]
    fn test_welcome_mentions_default_city() {
        colored::control::set_override(false);
        let banner = ConsoleFormatter::welcome("東京");
        assert!(banner.contains("東京"));
        assert!(banner.contains("quit"));
    }
}

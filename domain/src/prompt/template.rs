//! Prompt templates

use crate::agent::value_objects::Topic;

/// Reply when a query names no topic the router knows about
pub const FALLBACK_MESSAGE: &str = "申し訳ありません。具体的な情報の種類を指定してください。";

/// Templates for every prompt the concierge sends
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt of the agent answering `topic`
    pub fn agent_system(topic: Topic) -> &'static str {
        match topic {
            Topic::Weather => {
                r#"あなたは天気情報を案内するアシスタントです。
都市の天気を聞かれたら必ず get_weather ツールで現在の天気を取得してください。
取得した気温、天気、湿度、風速をもとに、簡潔で分かりやすい日本語で回答してください。
ツールが返していない情報を推測で補わないでください。"#
            }
            Topic::Food => {
                r#"あなたは地域の料理や名物を案内するアシスタントです。
都市の料理について聞かれたら必ず get_food_info ツールで情報を取得してください。
取得した内容をもとに、代表的な料理や名物を簡潔な日本語で紹介してください。
ツールが返していない情報を推測で補わないでください。"#
            }
        }
    }

    /// Prompt asking for the single city mentioned in `query`
    pub fn city_extraction(query: &str, default_city: &str) -> String {
        format!(
            r#"次の日本語の質問文から都市名だけを抽出してください。都市名が複数ある場合は最も関連性が高いものを1つだけ返してください。都市名以外は一切含めず、都市名が見つからない場合は「{default_city}」とだけ返してください。

質問文: {query}
都市名:"#
        )
    }

    /// System prompt for translating a Japanese city name to English
    pub fn localization_system() -> &'static str {
        "以下の日本語の都市名を英語に変換してください。都市名のみを回答してください。例：東京 → Tokyo"
    }
}

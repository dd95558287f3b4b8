use super::*;
use crate::types::Topic;
use serde::{Deserialize, Serialize};
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// System instruction for the topic generator. The game being played is
/// "ito": players hold secret 1-100 cards and describe their number through
/// the topic, so good topics are subjective, gradated, and universal.
const SYSTEM_INSTRUCTION: &str = "あなたは、協力型ボードゲーム「ito（イト）」のコンテンツ生成エンジンです。\n\
ユーザーからのオーダー（要望）に基づいて、ゲームが盛り上がる「お題」を3つ生成してください。\n\
\n\
## ゲームのルール\n\
1〜100の数字カードを配られたプレイヤーが、数字を口にせず、「お題」に沿った言葉で自分の数字を表現し、全員で協力して小さい順にカードを出すゲーム。\n\
\n\
## 良問（採用すべきお題）の条件\n\
1. **主観的であること**: 正解がなく、個人の価値観や経験に依存するもの。\n\
2. **グラデーションがあること**: 0か100かの二択ではなく、中間（40〜60）の回答が無数に想像できるもの。\n\
3. **普遍的であること**: 専門知識が不要で、誰でも参加できるテーマであること。";

/// Gemini provider implementation, talking to the REST `generateContent`
/// endpoint in JSON mode so the response is a pure JSON topic array.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given API key and model
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self::with_base_url(api_key, model, timeout, DEFAULT_BASE_URL.to_string())
    }

    /// Same, but against a custom endpoint (used by tests)
    pub fn with_base_url(
        api_key: String,
        model: String,
        timeout: Duration,
        base_url: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
            timeout,
        }
    }

    /// Schema the model is constrained to: an array of {id, theme} objects.
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "id": { "type": "NUMBER" },
                    "theme": { "type": "STRING" },
                },
                "required": ["id", "theme"],
            },
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Parse the JSON-mode response text into topics.
fn parse_topics(text: &str) -> TopicResult<Vec<Topic>> {
    serde_json::from_str::<Vec<Topic>>(text.trim())
        .map_err(|e| TopicError::SchemaViolation(e.to_string()))
}

#[async_trait]
impl TopicProvider for GeminiProvider {
    async fn generate(&self, hint: &str) -> TopicResult<Vec<Topic>> {
        let user_prompt = format!("オーダー:\n\"\"\"\n{}\n\"\"\"", hint);

        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: user_prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::response_schema(),
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        // Execute with timeout
        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&url).json(&request).send(),
        )
        .await
        .map_err(|_| TopicError::Timeout(self.timeout))?
        .map_err(|e| TopicError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TopicError::ApiError(format!(
                "Gemini API returned status: {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TopicError::ParseError(e.to_string()))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| TopicError::ParseError("No content in response".to_string()))?;

        parse_topics(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

mod gemini;

use async_trait::async_trait;
use std::time::Duration;

pub use gemini::GeminiProvider;

use crate::types::Topic;

/// Result type for topic generation
pub type TopicResult<T> = Result<T, TopicError>;

/// Errors that can occur while generating topics
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Response parsing failed: {0}")]
    ParseError(String),

    #[error("Response violated the topic schema: {0}")]
    SchemaViolation(String),
}

/// Hint used when the host left the order field empty.
pub const DEFAULT_HINT: &str = "特になし";

/// The static list substituted whenever generation fails.
pub fn fallback_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: 1,
            theme: "海外旅行にいくなら？".to_string(),
        },
        Topic {
            id: 2,
            theme: "無人島に持っていくなら？".to_string(),
        },
        Topic {
            id: 3,
            theme: "好きな都道府県は？".to_string(),
        },
    ]
}

/// Trait for generative-text backends that can produce topic lists
#[async_trait]
pub trait TopicProvider: Send + Sync {
    /// Generate topics for the given free-text hint. Single attempt, no
    /// retry.
    async fn generate(&self, hint: &str) -> TopicResult<Vec<Topic>>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Front door for topic generation.
///
/// Wraps an optional provider so the rest of the app never has to care
/// whether an API key was configured: [`TopicService::generate`] always
/// yields a usable list.
pub struct TopicService {
    provider: Option<Box<dyn TopicProvider>>,
}

impl TopicService {
    pub fn new(provider: Box<dyn TopicProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A service with no backend; every generation falls back.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// One attempt against the provider, surfacing the failure. Used by the
    /// HTTP endpoint, which reports errors structurally.
    pub async fn try_generate(&self, hint: &str) -> TopicResult<Vec<Topic>> {
        let provider = self.provider.as_ref().ok_or(TopicError::NotConfigured)?;

        let topics = provider.generate(hint).await?;
        if topics.is_empty() {
            return Err(TopicError::SchemaViolation("empty topic list".to_string()));
        }
        if topics.iter().any(|t| t.theme.trim().is_empty()) {
            return Err(TopicError::SchemaViolation(
                "topic with empty theme".to_string(),
            ));
        }
        Ok(topics)
    }

    /// Generate topics, substituting the static fallback list on any
    /// failure. Never returns an empty list and never propagates an error.
    pub async fn generate(&self, hint: &str) -> Vec<Topic> {
        match self.try_generate(hint).await {
            Ok(topics) => topics,
            Err(e) => {
                tracing::warn!("Topic generation failed: {}, using fallback list", e);
                fallback_topics()
            }
        }
    }
}

/// Configuration for the topic provider
#[derive(Debug, Clone)]
pub struct TopicConfig {
    /// Gemini API key; topic generation is disabled without it
    pub api_key: Option<String>,
    /// Gemini model to use
    pub model: String,
    /// Timeout for a generation request
    pub timeout: Duration,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TopicConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok().and_then(|key| {
            let trimmed = key.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .and_then(|model| {
                let trimmed = model.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| "gemini-3-flash-preview".to_string());

        Self {
            api_key,
            model,
            timeout: std::env::var("TOPIC_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(30)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build a [`TopicService`], disabled when no API key is set.
    pub fn build_service(&self) -> TopicService {
        match &self.api_key {
            Some(api_key) => TopicService::new(Box::new(GeminiProvider::new(
                api_key.clone(),
                self.model.clone(),
                self.timeout,
            ))),
            None => TopicService::disabled(),
        }
    }
}

/// Carousel over the generated topics, mirroring the host's topic picker:
/// next/previous wrap around, regeneration replaces the whole deck.
#[derive(Debug, Clone, Default)]
pub struct TopicDeck {
    topics: Vec<Topic>,
    index: usize,
}

impl TopicDeck {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics, index: 0 }
    }

    pub fn current(&self) -> Option<&Topic> {
        self.topics.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.topics.is_empty() {
            self.index = (self.index + 1) % self.topics.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.topics.is_empty() {
            self.index = (self.index + self.topics.len() - 1) % self.topics.len();
        }
    }

    /// Swap in a freshly generated list, starting back at the first topic.
    pub fn replace(&mut self, topics: Vec<Topic>) {
        self.topics = topics;
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// 1-based position for the "n / total" indicator.
    pub fn position(&self) -> Option<usize> {
        (!self.topics.is_empty()).then(|| self.index + 1)
    }
}

use lexis_types::SuggestedWord;

pub mod client;
pub mod parse;

pub use client::{DisabledSuggester, LlmSuggester};
pub use parse::{fallback_words, parse_completion};

/// Source of vocabulary suggestions
#[async_trait::async_trait]
pub trait WordSuggester: Send + Sync {
    /// Ask the model for words about `topic`; returns the raw completion text
    async fn complete(&self, topic: &str) -> Result<String, SuggestError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_network: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    Generated,
    /// Placeholder words, with the reason generation failed
    Fallback(String),
}

#[derive(Debug, Clone)]
pub struct Suggestions {
    pub words: Vec<SuggestedWord>,
    pub source: SuggestionSource,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Response has no completion text")]
    MissingCompletion,

    #[error("Completion contains no JSON array")]
    NoArray,

    #[error("Invalid word array: {0}")]
    InvalidArray(#[from] serde_json::Error),

    #[error("Suggestions are disabled")]
    Disabled,
}

/// Generate words for `topic`, never failing: any request or parse error
/// degrades to the placeholder list tagged with the topic.
pub async fn suggest_words(suggester: &dyn WordSuggester, topic: &str, id_base: u32) -> Suggestions {
    let result = match suggester.complete(topic).await {
        Ok(completion) => parse_completion(&completion, topic, id_base),
        Err(e) => Err(e),
    };

    match result {
        Ok(words) => {
            tracing::debug!(count = words.len(), %topic, "parsed suggestions");
            Suggestions {
                words,
                source: SuggestionSource::Generated,
            }
        }
        Err(e) => {
            tracing::warn!(provider = %suggester.metadata().name, %topic, "suggestions fell back to placeholders: {}", e);
            Suggestions {
                words: fallback_words(topic),
                source: SuggestionSource::Fallback(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Option<&'static str>);

    #[async_trait::async_trait]
    impl WordSuggester for Canned {
        async fn complete(&self, _topic: &str) -> Result<String, SuggestError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| SuggestError::ApiError("HTTP 500".to_string()))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "canned".to_string(),
                requires_network: false,
            }
        }
    }

    #[tokio::test]
    async fn test_generated_words() {
        let canned = Canned(Some(
            r#"Sure! [{"word": "Passport", "translation": "Hộ chiếu", "difficulty": "easy", "category": "Travel"}]"#,
        ));
        let result = suggest_words(&canned, "travel", 1200).await;

        assert_eq!(result.source, SuggestionSource::Generated);
        assert_eq!(result.words.len(), 1);
        assert_eq!(result.words[0].id, 1200);
        assert_eq!(result.words[0].word, "Passport");
    }

    #[tokio::test]
    async fn test_unparseable_completion_falls_back() {
        let canned = Canned(Some("I cannot help with that."));
        let result = suggest_words(&canned, "cooking", 1200).await;

        assert!(matches!(result.source, SuggestionSource::Fallback(_)));
        let words: Vec<_> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["Example", "Generated", "Custom", "Vocabulary", "Learning"]);
        assert!(result.words.iter().all(|w| w.category == "cooking"));
    }

    #[tokio::test]
    async fn test_request_failure_falls_back() {
        let result = suggest_words(&Canned(None), "music", 1200).await;
        assert_eq!(result.words.len(), 5);
        assert_eq!(
            result.source,
            SuggestionSource::Fallback("API error: HTTP 500".to_string())
        );
    }
}

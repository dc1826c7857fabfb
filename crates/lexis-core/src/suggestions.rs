//! AI suggestion screen state: the word groups on display and the request in
//! flight. Generating the words themselves is `lexis-suggest`'s job.

use lexis_types::{SuggestedWord, WordGroup};

use crate::error::SuggestionError;

#[derive(Debug, Clone)]
pub struct SuggestionBoard {
    groups: Vec<WordGroup>,
    prompt: String,
    generating: Option<String>,
}

impl SuggestionBoard {
    pub fn new(groups: Vec<WordGroup>) -> Self {
        Self {
            groups,
            prompt: String::new(),
            generating: None,
        }
    }

    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    /// First id handed to words of the next generated group
    pub fn next_id_base(&self) -> u32 {
        1000 + self.groups.len() as u32 * 100
    }

    /// Claim the request slot for `prompt`. Returns the trimmed topic to send.
    pub fn begin(&mut self, prompt: &str) -> Result<String, SuggestionError> {
        if let Some(topic) = &self.generating {
            return Err(SuggestionError::AlreadyGenerating(topic.clone()));
        }

        self.prompt = prompt.to_string();
        let topic = prompt.trim();
        if topic.is_empty() {
            return Err(SuggestionError::EmptyPrompt);
        }

        self.generating = Some(topic.to_string());
        Ok(topic.to_string())
    }

    /// Put the generated words on top as a new group and clear the prompt
    pub fn finish(&mut self, words: Vec<SuggestedWord>) -> Result<&WordGroup, SuggestionError> {
        let topic = self.generating.take().ok_or(SuggestionError::NotGenerating)?;

        let group = WordGroup {
            id: self.groups.len() as u32 + 1,
            title: format!("Vocabulary: {topic}"),
            description: format!("Words related to {topic}"),
            words,
        };
        tracing::info!(group = group.id, words = group.words.len(), %topic, "suggestion group added");

        self.groups.insert(0, group);
        self.prompt.clear();
        Ok(&self.groups[0])
    }
}

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::route::Route;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Navigate(Route),
    Back,
    Help,
    Quit,

    // Review session
    StartQuiz,
    SelectAnswer(usize),
    TypeAnswer(String),
    SubmitAnswer,
    RestartReview,

    // Flashcard study
    DragCard(Vec2),
    ReleaseCard,
    FlipCard,
    PlayPronunciation,
    SwipeAnimationDone(ScopeId),

    // AI suggestions
    GenerateSuggestions(String),
    SuggestionsReady {
        scope: ScopeId,
        prompt: String,
        words: Vec<SuggestedWord>,
    },

    // Pronunciation practice
    StartRecording,
    StopRecording,
    PlayRecording,
    AnalysisComplete {
        scope: ScopeId,
        score: u8,
    },

    // Category, word detail, profile
    SearchWords(String),
    ToggleMastered(u32),
    ToggleFavorite,
    ToggleExpanded,
    ToggleSetting(Setting),
    ResetProgress,

    /// Rendered screen, sent from the event loop to the shell
    Frame(Vec<String>),
    /// One-off message for the shell (toasts)
    Notice(String),
}

/// Identifies one mounted screen instance.
///
/// Background completions carry the id of the screen that started them so the
/// event loop can drop results addressed to a screen that is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(Uuid);

impl ScopeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown difficulty: {0}")]
    Difficulty(String),

    #[error("unknown setting: {0}")]
    Setting(String),
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseError::Difficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordinal learning stage of a review item, 0 (new) to 5 (mastered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SrsLevel(u8);

impl SrsLevel {
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(Self(level))
    }

    /// Levels above the maximum are capped
    pub fn clamped(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn stage(&self) -> LearningStage {
        match self.0 {
            0 => LearningStage::New,
            1 | 2 => LearningStage::Learning,
            3 | 4 => LearningStage::Review,
            _ => LearningStage::Mastered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningStage {
    New,
    Learning,
    Review,
    Mastered,
}

impl LearningStage {
    pub fn label(&self) -> &'static str {
        match self {
            LearningStage::New => "new",
            LearningStage::Learning => "learning",
            LearningStage::Review => "review",
            LearningStage::Mastered => "mastered",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewItem {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub last_reviewed_at: SystemTime,
    pub due_at: SystemTime,
    pub level: SrsLevel,
}

/// What a multiple-choice question shows: a word to translate, or a translation
/// to find the word for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Word(String),
    Translation(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice {
        prompt: Prompt,
        options: Vec<String>,
        correct_answer: String,
    },
    FillInBlank {
        sentence: String,
        correct_answer: String,
    },
    Matching {
        word: String,
        options: Vec<String>,
        correct_answer: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub kind: QuestionKind,
}

impl QuizQuestion {
    /// Choices for selectable questions, `None` for free text
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } | QuestionKind::Matching { options, .. } => {
                Some(options)
            }
            QuestionKind::FillInBlank { .. } => None,
        }
    }

    pub fn correct_answer(&self) -> &str {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_answer, .. }
            | QuestionKind::FillInBlank { correct_answer, .. }
            | QuestionKind::Matching { correct_answer, .. } => correct_answer,
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self.kind, QuestionKind::FillInBlank { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub example: String,
    pub pronunciation: String,
    pub difficulty: Difficulty,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedWord {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub category: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub words: Vec<SuggestedWord>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub total_words: u32,
    /// Percent complete
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordItem {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub mastered: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone)]
pub struct RelatedWord {
    pub id: u32,
    pub word: String,
    pub translation: String,
}

#[derive(Debug, Clone)]
pub struct WordEntry {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definition: String,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub is_favorite: bool,
    pub difficulty: Difficulty,
    pub stage: LearningStage,
    pub related: Vec<RelatedWord>,
}

#[derive(Debug, Clone)]
pub struct PracticeWord {
    pub id: u32,
    pub word: String,
    pub pronunciation: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Notifications,
    DarkMode,
    Sound,
}

impl FromStr for Setting {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notifications" | "notify" => Ok(Setting::Notifications),
            "dark" | "darkmode" | "dark-mode" => Ok(Setting::DarkMode),
            "sound" => Ok(Setting::Sound),
            other => Err(ParseError::Setting(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(ParseError::Difficulty("extreme".to_string()))
        );
    }

    #[test]
    fn test_setting_parse() {
        assert_eq!("dark-mode".parse::<Setting>(), Ok(Setting::DarkMode));
        let err = "volume".parse::<Setting>().unwrap_err();
        assert_eq!(err, ParseError::Setting("volume".to_string()));
        assert_eq!(err.to_string(), "unknown setting: volume");
    }

    #[test]
    fn test_srs_stages() {
        assert_eq!(SrsLevel::new(6), None);
        assert_eq!(SrsLevel::clamped(9).stage(), LearningStage::Mastered);
        assert_eq!(SrsLevel::clamped(2).stage(), LearningStage::Learning);
    }
}

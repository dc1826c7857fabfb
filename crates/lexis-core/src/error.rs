#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("quiz is not in progress")]
    NotInProgress,

    #[error("quiz already started")]
    AlreadyStarted,

    #[error("quiz is not complete")]
    NotComplete,

    #[error("question {0} expects typed text")]
    ExpectsText(u32),

    #[error("question {0} expects a choice")]
    ExpectsChoice(u32),

    #[error("option {index} out of range ({len} options)")]
    NoSuchOption { index: usize, len: usize },

    #[error("no answer given")]
    NoAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("deck is empty")]
    EmptyDeck,

    #[error("card is animating off-screen")]
    Animating,

    #[error("no swipe animation in flight")]
    NotSwiping,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("already generating suggestions for '{0}'")]
    AlreadyGenerating(String),

    #[error("no generation in flight")]
    NotGenerating,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PronunciationError {
    #[error("already recording")]
    AlreadyRecording,

    #[error("analysis in progress")]
    Analyzing,

    #[error("not recording")]
    NotRecording,

    #[error("no analysis in flight")]
    NotAnalyzing,

    #[error("nothing recorded yet")]
    NoRecording,
}

/// Failure to build a screen's state on mount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    #[error("flashcards: {0}")]
    Cards(#[from] CardError),
}

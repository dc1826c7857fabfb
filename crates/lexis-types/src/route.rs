use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryParams {
    pub category_id: u32,
}

impl Default for CategoryParams {
    fn default() -> Self {
        Self { category_id: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParams {
    pub word_id: u32,
}

impl Default for WordParams {
    fn default() -> Self {
        Self { word_id: 1 }
    }
}

/// Navigable screens and their parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    FlashcardStudy,
    ReviewSession,
    CategoryDetail(CategoryParams),
    WordDetail(WordParams),
    PronunciationPractice(WordParams),
    Profile,
    AiSuggestions,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::FlashcardStudy => "FlashcardStudy",
            Route::ReviewSession => "ReviewSession",
            Route::CategoryDetail(_) => "CategoryDetail",
            Route::WordDetail(_) => "WordDetail",
            Route::PronunciationPractice(_) => "PronunciationPractice",
            Route::Profile => "Profile",
            Route::AiSuggestions => "AiSuggestions",
        }
    }

    /// Build a route from a screen name and an optional id parameter.
    ///
    /// Names match case-insensitively and accept short aliases (`cards`,
    /// `review`, `word`...). A missing id falls back to the screen default.
    pub fn parse(name: &str, id: Option<u32>) -> Result<Self, RouteError> {
        let route = match name.trim().to_lowercase().as_str() {
            "home" => Route::Home,
            "flashcardstudy" | "flashcards" | "cards" => Route::FlashcardStudy,
            "reviewsession" | "review" | "quiz" => Route::ReviewSession,
            "categorydetail" | "category" => Route::CategoryDetail(
                id.map(|category_id| CategoryParams { category_id })
                    .unwrap_or_default(),
            ),
            "worddetail" | "word" => {
                Route::WordDetail(id.map(|word_id| WordParams { word_id }).unwrap_or_default())
            }
            "pronunciationpractice" | "pronunciation" | "speak" => Route::PronunciationPractice(
                id.map(|word_id| WordParams { word_id }).unwrap_or_default(),
            ),
            "profile" => Route::Profile,
            "aisuggestions" | "suggestions" | "ai" => Route::AiSuggestions,
            other => return Err(RouteError::UnknownScreen(other.to_string())),
        };

        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::CategoryDetail(p) => write!(f, "{}({})", self.name(), p.category_id),
            Route::WordDetail(p) | Route::PronunciationPractice(p) => {
                write!(f, "{}({})", self.name(), p.word_id)
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    /// Parses `"<screen> [id]"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().ok_or(RouteError::Empty)?;
        let id = parts
            .next()
            .map(|raw| {
                raw.parse::<u32>()
                    .map_err(|_| RouteError::InvalidParam(raw.to_string()))
            })
            .transpose()?;

        Route::parse(name, id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no screen given")]
    Empty,

    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("invalid id parameter: {0}")]
    InvalidParam(String),
}

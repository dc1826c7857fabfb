use std::time::SystemTime;

use lexis_config::Config;
use lexis_types::Route;

use crate::cards::CardStack;
use crate::catalog::CategoryBrowser;
use crate::error::ScreenError;
use crate::home::HomeView;
use crate::profile::ProfileView;
use crate::pronunciation::PronunciationSession;
use crate::review::ReviewSession;
use crate::seed;
use crate::suggestions::SuggestionBoard;
use crate::word::WordDetailView;

/// State of the mounted screen. Dropping it is unmounting: nothing survives.
#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeView),
    Flashcards(CardStack),
    Review(ReviewSession),
    Category(CategoryBrowser),
    Word(WordDetailView),
    Pronunciation(PronunciationSession),
    Profile(ProfileView),
    Suggestions(SuggestionBoard),
}

impl Screen {
    /// Fresh state for `route`, seeded from the built-in data
    pub fn mount(route: Route, config: &Config) -> Result<Self, ScreenError> {
        let screen = match route {
            Route::Home => Screen::Home(HomeView::new(&config.ui.username, config.ui.daily_goal)),
            Route::FlashcardStudy => {
                Screen::Flashcards(CardStack::new(seed::flashcards(), config.gesture.clone())?)
            }
            Route::ReviewSession => Screen::Review(ReviewSession::new(
                seed::review_items(SystemTime::now()),
                seed::quiz_questions(),
                &config.review,
            )),
            Route::CategoryDetail(params) => {
                Screen::Category(CategoryBrowser::open(params.category_id))
            }
            Route::WordDetail(params) => {
                Screen::Word(WordDetailView::new(seed::word_entry(params.word_id)))
            }
            Route::PronunciationPractice(params) => Screen::Pronunciation(
                PronunciationSession::new(seed::practice_word(params.word_id)),
            ),
            Route::Profile => {
                Screen::Profile(ProfileView::new(&config.ui.username, config.ui.daily_goal))
            }
            Route::AiSuggestions => Screen::Suggestions(SuggestionBoard::new(seed::word_groups())),
        };

        Ok(screen)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home(_) => "Home",
            Screen::Flashcards(_) => "FlashcardStudy",
            Screen::Review(_) => "ReviewSession",
            Screen::Category(_) => "CategoryDetail",
            Screen::Word(_) => "WordDetail",
            Screen::Pronunciation(_) => "PronunciationPractice",
            Screen::Profile(_) => "Profile",
            Screen::Suggestions(_) => "AiSuggestions",
        }
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::{CategoryParams, WordParams};

    use super::*;
    use crate::error::CardError;

    #[test]
    fn test_every_route_mounts() {
        let config = Config::default();
        let routes = [
            Route::Home,
            Route::FlashcardStudy,
            Route::ReviewSession,
            Route::CategoryDetail(CategoryParams::default()),
            Route::WordDetail(WordParams::default()),
            Route::PronunciationPractice(WordParams::default()),
            Route::Profile,
            Route::AiSuggestions,
        ];

        for route in routes {
            let screen = Screen::mount(route, &config).unwrap();
            assert_eq!(screen.name(), route.name());
        }
    }

    #[test]
    fn test_mount_error_names_the_screen() {
        let err = ScreenError::from(CardError::EmptyDeck);
        assert_eq!(err, ScreenError::Cards(CardError::EmptyDeck));
        assert_eq!(err.to_string(), "flashcards: deck is empty");
    }
}

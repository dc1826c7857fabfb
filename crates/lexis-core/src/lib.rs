pub mod answer;
pub mod cards;
pub mod catalog;
pub mod error;
pub mod home;
pub mod navigator;
pub mod profile;
pub mod pronunciation;
pub mod review;
pub mod screen;
pub mod seed;
pub mod suggestions;
pub mod word;

pub use error::{CardError, PronunciationError, QuizError, ScreenError, SuggestionError};
pub use navigator::Navigator;
pub use screen::Screen;

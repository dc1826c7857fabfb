//! Review quiz: a linear state machine over a fixed question list.
//!
//! `Preview` shows the due items. `start_quiz` enters `InProgress` at question 0
//! with a zero score. Each `submit_answer` scores the current question and moves
//! one question forward; submitting the last question lands in `Complete`.
//! `restart_review` is the only way back to `Preview`.
//!
//! Calls that do not fit the current state are rejected with a [`QuizError`] and
//! leave the session untouched. A shell maps those to disabled controls.

use lexis_config::review::ReviewConfig;
use lexis_types::{QuizQuestion, ReviewItem};

use crate::answer::free_text_matches;
use crate::error::QuizError;

/// Answer being composed for the current question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attempt {
    pub index: usize,
    pub score: usize,
    pub selected_answer: Option<String>,
    pub text_input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizMode {
    #[default]
    Preview,
    InProgress(Attempt),
    Complete { score: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTier {
    Excellent,
    NeedsPractice,
}

impl CompletionTier {
    /// `score / total >= excellent_percent / 100`, in integer arithmetic
    pub fn for_score(score: usize, total: usize, excellent_percent: u32) -> Self {
        if score * 100 >= total * excellent_percent as usize {
            CompletionTier::Excellent
        } else {
            CompletionTier::NeedsPractice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CompletionTier::Excellent => "Excellent! You know most of these words.",
            CompletionTier::NeedsPractice => {
                "Keep going! Review these words again to master them."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Next {
        correct: bool,
    },
    Finished {
        correct: bool,
        score: usize,
        total: usize,
        tier: CompletionTier,
    },
}

impl SubmitOutcome {
    pub fn correct(&self) -> bool {
        match self {
            SubmitOutcome::Next { correct } | SubmitOutcome::Finished { correct, .. } => *correct,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    items: Vec<ReviewItem>,
    questions: Vec<QuizQuestion>,
    mode: QuizMode,
    excellent_percent: u32,
}

impl ReviewSession {
    pub fn new(items: Vec<ReviewItem>, questions: Vec<QuizQuestion>, config: &ReviewConfig) -> Self {
        Self {
            items,
            questions,
            mode: QuizMode::Preview,
            excellent_percent: config.excellent_percent,
        }
    }

    pub fn mode(&self) -> &QuizMode {
        &self.mode
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Items in the current batch. No date filtering: the whole list is due.
    pub fn due_items(&self) -> &[ReviewItem] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.mode {
            QuizMode::InProgress(attempt) => self.questions.get(attempt.index),
            _ => None,
        }
    }

    /// 0 in preview, the question being answered while in progress, and the
    /// question count once complete.
    pub fn current_question_index(&self) -> usize {
        match &self.mode {
            QuizMode::Preview => 0,
            QuizMode::InProgress(attempt) => attempt.index,
            QuizMode::Complete { .. } => self.questions.len(),
        }
    }

    pub fn score(&self) -> usize {
        match &self.mode {
            QuizMode::Preview => 0,
            QuizMode::InProgress(attempt) => attempt.score,
            QuizMode::Complete { score } => *score,
        }
    }

    pub fn attempt(&self) -> Option<&Attempt> {
        match &self.mode {
            QuizMode::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    /// Fraction of questions already answered, for the progress bar
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current_question_index() as f32 / self.questions.len() as f32
    }

    pub fn tier(&self) -> Option<CompletionTier> {
        match &self.mode {
            QuizMode::Complete { score } => Some(CompletionTier::for_score(
                *score,
                self.questions.len(),
                self.excellent_percent,
            )),
            _ => None,
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        let (Some(question), Some(attempt)) = (self.current_question(), self.attempt()) else {
            return false;
        };

        if question.is_free_text() {
            attempt
                .text_input
                .as_deref()
                .is_some_and(|text| !text.is_empty())
        } else {
            attempt.selected_answer.is_some()
        }
    }

    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if !matches!(self.mode, QuizMode::Preview) {
            return Err(QuizError::AlreadyStarted);
        }

        self.mode = QuizMode::InProgress(Attempt::default());
        tracing::debug!(questions = self.questions.len(), "quiz started");
        Ok(())
    }

    /// Record a choice for a multiple-choice or matching question
    pub fn select_answer(&mut self, choice: impl Into<String>) -> Result<(), QuizError> {
        let question_id = self.current_question().map(|q| (q.id, q.is_free_text()));
        let QuizMode::InProgress(attempt) = &mut self.mode else {
            return Err(QuizError::NotInProgress);
        };

        match question_id {
            Some((id, true)) => Err(QuizError::ExpectsText(id)),
            Some((_, false)) => {
                attempt.selected_answer = Some(choice.into());
                Ok(())
            }
            None => Err(QuizError::NotInProgress),
        }
    }

    /// Select the `index`-th option of the current question
    pub fn select_option(&mut self, index: usize) -> Result<&str, QuizError> {
        let question = self.current_question().ok_or(QuizError::NotInProgress)?;
        let options = question.options().ok_or(QuizError::ExpectsText(question.id))?;
        let choice = options
            .get(index)
            .cloned()
            .ok_or(QuizError::NoSuchOption {
                index,
                len: options.len(),
            })?;

        self.select_answer(choice)?;

        Ok(self
            .attempt()
            .and_then(|a| a.selected_answer.as_deref())
            .unwrap_or_default())
    }

    /// Record typed text for a fill-in-the-blank question
    pub fn set_text_answer(&mut self, text: impl Into<String>) -> Result<(), QuizError> {
        let question_id = self.current_question().map(|q| (q.id, q.is_free_text()));
        let QuizMode::InProgress(attempt) = &mut self.mode else {
            return Err(QuizError::NotInProgress);
        };

        match question_id {
            Some((_, true)) => {
                attempt.text_input = Some(text.into());
                Ok(())
            }
            Some((id, false)) => Err(QuizError::ExpectsChoice(id)),
            None => Err(QuizError::NotInProgress),
        }
    }

    /// Score the current answer and move to the next question
    pub fn submit_answer(&mut self) -> Result<SubmitOutcome, QuizError> {
        if !self.can_submit() {
            return match self.mode {
                QuizMode::InProgress(_) => Err(QuizError::NoAnswer),
                _ => Err(QuizError::NotInProgress),
            };
        }

        let total = self.questions.len();
        let QuizMode::InProgress(attempt) = &mut self.mode else {
            return Err(QuizError::NotInProgress);
        };
        let question = &self.questions[attempt.index];

        let correct = if question.is_free_text() {
            attempt
                .text_input
                .as_deref()
                .is_some_and(|text| free_text_matches(question.correct_answer(), text))
        } else {
            attempt.selected_answer.as_deref() == Some(question.correct_answer())
        };

        if correct {
            attempt.score += 1;
        }
        tracing::debug!(
            question = question.id,
            correct,
            score = attempt.score,
            "answer submitted"
        );

        if attempt.index + 1 < total {
            attempt.index += 1;
            attempt.selected_answer = None;
            attempt.text_input = None;
            return Ok(SubmitOutcome::Next { correct });
        }

        let score = attempt.score;
        let tier = CompletionTier::for_score(score, total, self.excellent_percent);
        self.mode = QuizMode::Complete { score };
        tracing::info!(score, total, ?tier, "quiz complete");

        Ok(SubmitOutcome::Finished {
            correct,
            score,
            total,
            tier,
        })
    }

    /// Back to the preview list, discarding the score
    pub fn restart_review(&mut self) -> Result<(), QuizError> {
        if !matches!(self.mode, QuizMode::Complete { .. }) {
            return Err(QuizError::NotComplete);
        }
        self.mode = QuizMode::Preview;
        Ok(())
    }
}

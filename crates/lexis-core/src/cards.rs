//! Flashcard stack driven by drag gestures.
//!
//! A release further than the swipe threshold to the right accepts the card
//! ("known"), to the left rejects it ("unknown"), anything shorter snaps back.
//! Accept and reject start a swipe-out animation; the index only advances on
//! [`CardStack::animation_complete`]. Drags and releases are refused while that
//! animation is in flight.

use lexis_config::gesture::GestureConfig;
use lexis_types::{Flashcard, Vec2};

use crate::error::CardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Swiped right: the learner knows the word
    Accept,
    /// Swiped left: the learner does not know it yet
    Reject,
    SnapBack,
}

impl ReleaseOutcome {
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            ReleaseOutcome::Accept => Some(SwipeDirection::Right),
            ReleaseOutcome::Reject => Some(SwipeDirection::Left),
            ReleaseOutcome::SnapBack => None,
        }
    }
}

/// Classify a release by its horizontal displacement. The threshold itself
/// snaps back.
pub fn classify_release(dx: f32, threshold: f32) -> ReleaseOutcome {
    if dx > threshold {
        ReleaseOutcome::Accept
    } else if dx < -threshold {
        ReleaseOutcome::Reject
    } else {
        ReleaseOutcome::SnapBack
    }
}

/// Card tilt for a horizontal offset: linear over half a screen width, clamped
/// to `±max_deg`.
pub fn rotation_for(dx: f32, screen_width: f32, max_deg: f32) -> f32 {
    let half = screen_width / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    (dx / half * max_deg).clamp(-max_deg, max_deg)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Idle,
    Dragging,
    SwipingOut(SwipeDirection),
}

#[derive(Debug, Clone)]
pub struct CardStack {
    deck: Vec<Flashcard>,
    current_index: usize,
    revealed: bool,
    drag_offset: Vec2,
    phase: CardPhase,
    known: usize,
    unknown: usize,
    gesture: GestureConfig,
}

impl CardStack {
    pub fn new(deck: Vec<Flashcard>, gesture: GestureConfig) -> Result<Self, CardError> {
        if deck.is_empty() {
            return Err(CardError::EmptyDeck);
        }

        Ok(Self {
            deck,
            current_index: 0,
            revealed: false,
            drag_offset: Vec2::ZERO,
            phase: CardPhase::Idle,
            known: 0,
            unknown: 0,
            gesture,
        })
    }

    pub fn current_card(&self) -> &Flashcard {
        &self.deck[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// 1-based position and deck length, for the "3 / 5" counter
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.deck.len())
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CardPhase::SwipingOut(_))
    }

    /// Cards swiped right and left so far
    pub fn tallies(&self) -> (usize, usize) {
        (self.known, self.unknown)
    }

    pub fn rotation_deg(&self) -> f32 {
        rotation_for(
            self.drag_offset.x,
            self.gesture.screen_width,
            self.gesture.max_rotation_deg,
        )
    }

    pub fn gesture(&self) -> &GestureConfig {
        &self.gesture
    }

    /// Follow the pointer during a drag
    pub fn drag_to(&mut self, offset: Vec2) -> Result<(), CardError> {
        if self.is_animating() {
            return Err(CardError::Animating);
        }
        self.phase = CardPhase::Dragging;
        self.drag_offset = offset;
        Ok(())
    }

    /// Pointer released: classify the drag and start the matching animation
    pub fn release(&mut self) -> Result<ReleaseOutcome, CardError> {
        if self.is_animating() {
            return Err(CardError::Animating);
        }

        let outcome = classify_release(self.drag_offset.x, self.gesture.swipe_threshold);
        match outcome.direction() {
            Some(direction) => {
                let target_x = match direction {
                    SwipeDirection::Right => self.gesture.screen_width,
                    SwipeDirection::Left => -self.gesture.screen_width,
                };
                self.drag_offset = Vec2::new(target_x, 0.0);
                self.phase = CardPhase::SwipingOut(direction);
            }
            None => {
                self.drag_offset = Vec2::ZERO;
                self.phase = CardPhase::Idle;
            }
        }

        tracing::debug!(card = self.current_card().id, ?outcome, "card released");
        Ok(outcome)
    }

    /// Swipe-out animation finished: move to the next card, wrapping at the end
    pub fn animation_complete(&mut self) -> Result<usize, CardError> {
        let CardPhase::SwipingOut(direction) = self.phase else {
            return Err(CardError::NotSwiping);
        };

        match direction {
            SwipeDirection::Right => self.known += 1,
            SwipeDirection::Left => self.unknown += 1,
        }

        self.current_index = (self.current_index + 1) % self.deck.len();
        self.drag_offset = Vec2::ZERO;
        self.revealed = false;
        self.phase = CardPhase::Idle;

        Ok(self.current_index)
    }

    /// Show or hide the translation side
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn stack() -> CardStack {
        CardStack::new(seed::flashcards(), GestureConfig::default()).unwrap()
    }

    fn swipe(stack: &mut CardStack, dx: f32) -> ReleaseOutcome {
        stack.drag_to(Vec2::new(dx, 12.0)).unwrap();
        let outcome = stack.release().unwrap();
        if outcome != ReleaseOutcome::SnapBack {
            stack.animation_complete().unwrap();
        }
        outcome
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify_release(150.0, 120.0), ReleaseOutcome::Accept);
        assert_eq!(classify_release(-150.0, 120.0), ReleaseOutcome::Reject);
        assert_eq!(classify_release(50.0, 120.0), ReleaseOutcome::SnapBack);
        assert_eq!(classify_release(120.0, 120.0), ReleaseOutcome::SnapBack);
        assert_eq!(classify_release(-120.0, 120.0), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_snap_back_returns_to_origin() {
        let mut stack = stack();
        stack.drag_to(Vec2::new(50.0, 30.0)).unwrap();
        assert_eq!(stack.release().unwrap(), ReleaseOutcome::SnapBack);
        assert_eq!(stack.drag_offset(), Vec2::ZERO);
        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.phase(), CardPhase::Idle);
    }

    #[test]
    fn test_rotation_is_clamped() {
        assert_eq!(rotation_for(0.0, 400.0, 10.0), 0.0);
        assert_eq!(rotation_for(100.0, 400.0, 10.0), 5.0);
        assert_eq!(rotation_for(-200.0, 400.0, 10.0), -10.0);
        assert_eq!(rotation_for(900.0, 400.0, 10.0), 10.0);
        assert_eq!(rotation_for(-900.0, 400.0, 10.0), -10.0);
    }

    #[test]
    fn test_accept_and_reject_both_advance() {
        let mut stack = stack();
        assert_eq!(swipe(&mut stack, 150.0), ReleaseOutcome::Accept);
        assert_eq!(stack.current_index(), 1);
        assert_eq!(swipe(&mut stack, -150.0), ReleaseOutcome::Reject);
        assert_eq!(stack.current_index(), 2);
        assert_eq!(stack.tallies(), (1, 1));
    }

    #[test]
    fn test_index_wraps_at_end() {
        let mut stack = stack();
        for _ in 0..4 {
            swipe(&mut stack, 150.0);
        }
        assert_eq!(stack.current_index(), 4);

        swipe(&mut stack, -150.0);
        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.position(), (1, 5));
    }

    #[test]
    fn test_index_waits_for_animation() {
        let mut stack = stack();
        stack.drag_to(Vec2::new(200.0, 0.0)).unwrap();
        stack.release().unwrap();

        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.phase(), CardPhase::SwipingOut(SwipeDirection::Right));
        assert_eq!(stack.drag_offset().x, stack.gesture().screen_width);
    }

    #[test]
    fn test_input_gated_while_animating() {
        let mut stack = stack();
        stack.drag_to(Vec2::new(-200.0, 0.0)).unwrap();
        stack.release().unwrap();

        assert_eq!(stack.drag_to(Vec2::new(10.0, 0.0)), Err(CardError::Animating));
        assert_eq!(stack.release(), Err(CardError::Animating));

        assert_eq!(stack.animation_complete(), Ok(1));
        assert_eq!(stack.animation_complete(), Err(CardError::NotSwiping));
        assert_eq!(stack.current_index(), 1);
    }

    #[test]
    fn test_reveal_toggles_and_resets_on_advance() {
        let mut stack = stack();
        assert!(stack.toggle_reveal());
        assert!(!stack.toggle_reveal());
        assert!(stack.toggle_reveal());

        swipe(&mut stack, 50.0);
        assert!(stack.revealed(), "snap back keeps the card");

        swipe(&mut stack, 150.0);
        assert!(!stack.revealed());
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(
            CardStack::new(vec![], GestureConfig::default()).unwrap_err(),
            CardError::EmptyDeck
        );
    }
}

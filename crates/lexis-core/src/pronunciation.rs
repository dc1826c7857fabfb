//! Pronunciation practice: record, wait for the (simulated) analysis, show a
//! score with feedback.

use lexis_types::PracticeWord;

use crate::error::PronunciationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PronunciationPhase {
    #[default]
    Idle,
    Recording,
    Analyzing,
    Scored {
        score: u8,
        feedback: Vec<String>,
    },
}

/// Feedback lines for a score. Tiers split at 70 and 85.
pub fn feedback_for(score: u8) -> [&'static str; 3] {
    if score < 70 {
        [
            "Try to emphasize the third syllable more.",
            "Work on the connection between syllables.",
            "Listen to the correct pronunciation again and try to match it.",
        ]
    } else if score < 85 {
        [
            "Your pronunciation is getting better!",
            "Focus on the \"ver\" sound in the middle.",
            "Try to maintain a smooth rhythm throughout the word.",
        ]
    } else {
        [
            "Excellent pronunciation!",
            "Your stress placement is very good.",
            "Keep practicing to maintain this level.",
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PronunciationSession {
    word: PracticeWord,
    phase: PronunciationPhase,
    /// Where the last take was stored
    recording: Option<String>,
}

impl PronunciationSession {
    pub fn new(word: PracticeWord) -> Self {
        Self {
            word,
            phase: PronunciationPhase::Idle,
            recording: None,
        }
    }

    pub fn word(&self) -> &PracticeWord {
        &self.word
    }

    pub fn phase(&self) -> &PronunciationPhase {
        &self.phase
    }

    /// A take is available for playback
    pub fn has_recording(&self) -> bool {
        self.recording.is_some()
    }

    pub fn is_recording(&self) -> bool {
        self.phase == PronunciationPhase::Recording
    }

    /// The take to play back
    pub fn replay(&self) -> Result<&str, PronunciationError> {
        self.recording
            .as_deref()
            .ok_or(PronunciationError::NoRecording)
    }

    /// Start a new take, dropping the previous one and its feedback
    pub fn start_recording(&mut self) -> Result<(), PronunciationError> {
        match self.phase {
            PronunciationPhase::Recording => Err(PronunciationError::AlreadyRecording),
            PronunciationPhase::Analyzing => Err(PronunciationError::Analyzing),
            PronunciationPhase::Idle | PronunciationPhase::Scored { .. } => {
                self.recording = None;
                self.phase = PronunciationPhase::Recording;
                Ok(())
            }
        }
    }

    /// Close the take stored at `uri` and start analysing it
    pub fn stop_recording(&mut self, uri: impl Into<String>) -> Result<(), PronunciationError> {
        if self.phase != PronunciationPhase::Recording {
            return Err(PronunciationError::NotRecording);
        }
        self.recording = Some(uri.into());
        self.phase = PronunciationPhase::Analyzing;
        Ok(())
    }

    /// The audio device failed mid-take; nothing was captured
    pub fn abort_recording(&mut self) {
        self.recording = None;
        self.phase = PronunciationPhase::Idle;
    }

    pub fn finish_analysis(&mut self, score: u8) -> Result<&[String], PronunciationError> {
        if self.phase != PronunciationPhase::Analyzing {
            return Err(PronunciationError::NotAnalyzing);
        }

        let feedback = feedback_for(score).iter().map(|s| s.to_string()).collect();
        self.phase = PronunciationPhase::Scored { score, feedback };

        match &self.phase {
            PronunciationPhase::Scored { feedback, .. } => Ok(feedback),
            _ => Err(PronunciationError::NotAnalyzing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_feedback_tiers() {
        assert_eq!(feedback_for(60)[0], "Try to emphasize the third syllable more.");
        assert_eq!(feedback_for(69)[0], "Try to emphasize the third syllable more.");
        assert_eq!(feedback_for(70)[0], "Your pronunciation is getting better!");
        assert_eq!(feedback_for(84)[0], "Your pronunciation is getting better!");
        assert_eq!(feedback_for(85)[0], "Excellent pronunciation!");
        assert_eq!(feedback_for(95)[0], "Excellent pronunciation!");
    }

    #[test]
    fn test_full_cycle() {
        let mut session = PronunciationSession::new(seed::practice_word(1));
        session.start_recording().unwrap();
        assert_eq!(session.start_recording(), Err(PronunciationError::AlreadyRecording));
        session.stop_recording("memory://take").unwrap();
        assert_eq!(session.phase(), &PronunciationPhase::Analyzing);
        assert_eq!(session.start_recording(), Err(PronunciationError::Analyzing));

        let feedback = session.finish_analysis(88).unwrap();
        assert_eq!(feedback.len(), 3);
        assert!(session.has_recording());
        assert_eq!(session.replay(), Ok("memory://take"));
        assert!(matches!(session.phase(), PronunciationPhase::Scored { score: 88, .. }));
    }

    #[test]
    fn test_new_take_clears_feedback() {
        let mut session = PronunciationSession::new(seed::practice_word(1));
        session.start_recording().unwrap();
        session.stop_recording("memory://take").unwrap();
        session.finish_analysis(61).unwrap();

        session.start_recording().unwrap();
        assert_eq!(session.phase(), &PronunciationPhase::Recording);
        assert!(!session.has_recording());
        assert_eq!(session.replay(), Err(PronunciationError::NoRecording));
    }

    #[test]
    fn test_out_of_order_calls() {
        let mut session = PronunciationSession::new(seed::practice_word(1));
        assert_eq!(session.stop_recording("memory://take"), Err(PronunciationError::NotRecording));
        assert_eq!(
            session.finish_analysis(80).unwrap_err(),
            PronunciationError::NotAnalyzing
        );

        session.start_recording().unwrap();
        session.abort_recording();
        assert_eq!(session.phase(), &PronunciationPhase::Idle);
    }
}

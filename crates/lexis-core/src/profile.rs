use lexis_types::Setting;

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    /// Percent
    pub progress: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettings {
    pub notifications: bool,
    pub dark_mode: bool,
    pub sound: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            sound: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub username: String,
    pub daily_goal: u32,
    pub streak: u32,
    pub total_words: u32,
    pub settings: ProfileSettings,
    reset_pending: bool,
}

/// Where a progress reset stands after a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    /// First request, waiting for the same request again
    Confirm,
    Done,
}

/// Days of study needed for the long-streak achievement
const STREAK_TARGET: u32 = 30;

impl ProfileView {
    pub fn new(username: impl Into<String>, daily_goal: u32) -> Self {
        Self {
            username: username.into(),
            daily_goal,
            streak: 7,
            total_words: 254,
            settings: ProfileSettings::default(),
            reset_pending: false,
        }
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Reset needs two requests in a row; anything else in between cancels it
    pub fn request_reset(&mut self) -> ResetStep {
        if !self.reset_pending {
            self.reset_pending = true;
            return ResetStep::Confirm;
        }

        self.reset_pending = false;
        self.streak = 0;
        self.total_words = 0;
        ResetStep::Done
    }

    pub fn cancel_reset(&mut self) {
        self.reset_pending = false;
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        let streak_progress =
            ((self.streak as f32 / STREAK_TARGET as f32) * 100.0).round().min(100.0) as u8;

        vec![
            Achievement {
                title: "Journey begins".to_string(),
                description: "Study 5 days in a row".to_string(),
                progress: 100,
                completed: true,
            },
            Achievement {
                title: "Super memory".to_string(),
                description: "Master 100 words".to_string(),
                progress: 100,
                completed: true,
            },
            Achievement {
                title: "Steady learner".to_string(),
                description: format!("Study {STREAK_TARGET} days in a row"),
                progress: streak_progress,
                completed: self.streak >= STREAK_TARGET,
            },
            Achievement {
                title: "Pronunciation master".to_string(),
                description: "Score 90% on 20 words".to_string(),
                progress: 45,
                completed: false,
            },
        ]
    }

    /// Flip a setting and describe the change for a toast
    pub fn toggle(&mut self, setting: Setting) -> String {
        self.cancel_reset();
        let (flag, name) = match setting {
            Setting::Notifications => (&mut self.settings.notifications, "Notifications"),
            Setting::DarkMode => (&mut self.settings.dark_mode, "Dark mode"),
            Setting::Sound => (&mut self.settings.sound, "Sound"),
        };
        *flag = !*flag;

        if *flag {
            format!("{name} enabled")
        } else {
            format!("{name} disabled")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_messages() {
        let mut profile = ProfileView::new("learner", 80);
        assert_eq!(profile.toggle(Setting::Notifications), "Notifications disabled");
        assert_eq!(profile.toggle(Setting::DarkMode), "Dark mode enabled");
        assert!(profile.settings.dark_mode);
    }

    #[test]
    fn test_streak_achievement_progress() {
        let profile = ProfileView::new("learner", 80);
        let streak = &profile.achievements()[2];
        assert_eq!(streak.progress, 23);
        assert!(!streak.completed);
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let mut profile = ProfileView::new("learner", 80);
        assert_eq!(profile.request_reset(), ResetStep::Confirm);
        assert!(profile.reset_pending());
        assert_eq!(profile.streak, 7);

        assert_eq!(profile.request_reset(), ResetStep::Done);
        assert!(!profile.reset_pending());
        assert_eq!((profile.streak, profile.total_words), (0, 0));
        assert_eq!(profile.achievements()[2].progress, 0);
    }

    #[test]
    fn test_other_action_cancels_reset() {
        let mut profile = ProfileView::new("learner", 80);
        profile.request_reset();
        profile.toggle(Setting::Sound);
        assert!(!profile.reset_pending());
        assert_eq!(profile.request_reset(), ResetStep::Confirm);
        assert_eq!(profile.total_words, 254);
    }
}

use lexis_types::{Category, SuggestedWord};

use crate::seed;

#[derive(Debug, Clone)]
pub struct HomeView {
    pub username: String,
    pub streak: u32,
    pub daily_goal: u32,
    pub learned_today: u32,
    pub categories: Vec<Category>,
    pub suggested: Vec<SuggestedWord>,
}

impl HomeView {
    pub fn new(username: impl Into<String>, daily_goal: u32) -> Self {
        Self {
            username: username.into(),
            streak: 7,
            daily_goal,
            learned_today: 45,
            categories: seed::categories(),
            suggested: seed::home_suggestions(),
        }
    }

    /// Today's progress toward the daily goal, rounded percent
    pub fn goal_percent(&self) -> u32 {
        if self.daily_goal == 0 {
            return 100;
        }
        ((self.learned_today as f32 / self.daily_goal as f32) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_percent() {
        let home = HomeView::new("learner", 80);
        assert_eq!(home.goal_percent(), 56);
        assert_eq!(HomeView::new("learner", 0).goal_percent(), 100);
    }
}

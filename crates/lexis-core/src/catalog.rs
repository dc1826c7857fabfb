use lexis_types::{Category, WordItem};

use crate::seed;

/// Word list of one category with a search box
#[derive(Debug, Clone)]
pub struct CategoryBrowser {
    category: Category,
    words: Vec<WordItem>,
    query: String,
}

impl CategoryBrowser {
    pub fn new(category: Category, words: Vec<WordItem>) -> Self {
        Self {
            category,
            words,
            query: String::new(),
        }
    }

    /// Open a seeded category. Unknown ids show the first category.
    pub fn open(category_id: u32) -> Self {
        let mut categories = seed::categories();
        let index = categories
            .iter()
            .position(|c| c.id == category_id)
            .unwrap_or_else(|| {
                tracing::debug!(category_id, "unknown category, showing the first one");
                0
            });
        let category = categories.swap_remove(index);

        Self::new(category, seed::category_words())
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Words whose text or translation contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&WordItem> {
        let needle = self.query.to_lowercase();
        self.words
            .iter()
            .filter(|w| {
                w.word.to_lowercase().contains(&needle)
                    || w.translation.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Flip the mastered flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_mastered(&mut self, word_id: u32) -> Option<bool> {
        let word = self.words.iter_mut().find(|w| w.id == word_id)?;
        word.mastered = !word.mastered;
        Some(word.mastered)
    }

    pub fn mastered_count(&self) -> usize {
        self.words.iter().filter(|w| w.mastered).count()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_falls_back_to_first() {
        assert_eq!(CategoryBrowser::open(3).category().id, 3);
        assert_eq!(CategoryBrowser::open(42).category().id, 1);
    }

    #[test]
    fn test_filter_matches_word_or_translation() {
        let mut browser = CategoryBrowser::open(1);
        assert_eq!(browser.filtered().len(), 9);

        browser.set_query("EFF");
        let hits: Vec<_> = browser.filtered().iter().map(|w| w.id).collect();
        assert_eq!(hits, vec![5]);

        browser.set_query("hợp");
        let hits: Vec<_> = browser.filtered().iter().map(|w| w.id).collect();
        assert_eq!(hits, vec![3]);
    }

    #[test]
    fn test_toggle_mastered() {
        let mut browser = CategoryBrowser::open(1);
        assert_eq!(browser.mastered_count(), 4);
        assert_eq!(browser.toggle_mastered(2), Some(true));
        assert_eq!(browser.mastered_count(), 5);
        assert_eq!(browser.toggle_mastered(2), Some(false));
        assert_eq!(browser.toggle_mastered(99), None);
    }
}

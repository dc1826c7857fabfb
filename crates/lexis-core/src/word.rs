use lexis_types::WordEntry;

/// Examples shown before the entry is expanded
const COLLAPSED_EXAMPLES: usize = 1;

#[derive(Debug, Clone)]
pub struct WordDetailView {
    entry: WordEntry,
    expanded: bool,
}

impl WordDetailView {
    pub fn new(entry: WordEntry) -> Self {
        Self {
            entry,
            expanded: false,
        }
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_favorite(&mut self) -> bool {
        self.entry.is_favorite = !self.entry.is_favorite;
        self.entry.is_favorite
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn visible_examples(&self) -> &[String] {
        if self.expanded {
            &self.entry.examples
        } else {
            let n = COLLAPSED_EXAMPLES.min(self.entry.examples.len());
            &self.entry.examples[..n]
        }
    }
}

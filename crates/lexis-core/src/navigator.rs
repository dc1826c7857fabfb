use lexis_types::Route;

/// Back stack of visited routes. Home is always at the bottom.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) -> Route {
        if route == Route::Home {
            self.stack.truncate(1);
        } else {
            self.stack.push(route);
        }
        tracing::debug!(%route, depth = self.stack.len(), "navigate");
        route
    }

    /// Pop back to the previous route. `None` at the root.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::WordParams;

    use super::*;

    #[test]
    fn test_back_walks_the_stack() {
        let mut nav = Navigator::new();
        nav.navigate(Route::AiSuggestions);
        nav.navigate(Route::WordDetail(WordParams { word_id: 1201 }));

        assert_eq!(nav.back(), Some(Route::AiSuggestions));
        assert_eq!(nav.back(), Some(Route::Home));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_home_resets_stack() {
        let mut nav = Navigator::new();
        nav.navigate(Route::ReviewSession);
        nav.navigate(Route::Profile);
        nav.navigate(Route::Home);
        assert_eq!(nav.depth(), 1);
    }
}

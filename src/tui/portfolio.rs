//! Portfolio grid state: category filter, item selection, and the
//! short fade that plays when the filter changes.
//!
//! Filtering never touches the catalog itself; it only decides which
//! items are visible and keeps the selection pinned to a visible item.

use std::time::Duration;

use crate::content::PortfolioItem;

/// Duration of the fade-in after a filter change.
pub const FADE_DURATION: Duration = Duration::from_millis(500);
/// Tag that matches every item.
pub const TAG_ALL: &str = "all";

/// Filter and selection state for the portfolio section.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    items: Vec<PortfolioItem>,
    tags: Vec<String>,
    active_tag: usize,
    selected: Option<usize>,
    fade: Option<Duration>,
}

impl PortfolioState {
    /// Creates the state over the full item list and the filter tags in
    /// display order. The first tag starts active; an empty tag list
    /// disables filtering and leaves every item visible.
    #[must_use]
    pub fn new(items: Vec<PortfolioItem>, tags: Vec<String>) -> Self {
        let mut state = Self {
            items,
            tags,
            active_tag: 0,
            selected: None,
            fade: None,
        };
        state.selected = state.visible_indices().first().copied();
        state
    }

    /// All items, in catalog order.
    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// The filter tags in display order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Index of the active tag within [`Self::tags`].
    #[must_use]
    pub fn active_tag_index(&self) -> usize {
        self.active_tag
    }

    /// The active tag, if filtering is enabled.
    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        self.tags.get(self.active_tag).map(String::as_str)
    }

    /// Whether item `index` passes the active filter.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        match self.active_tag() {
            None => true,
            Some(tag) => tag == TAG_ALL || item.category == tag,
        }
    }

    /// Indices of the items passing the active filter, in catalog order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.items.len()).filter(|&i| self.is_visible(i)).collect()
    }

    /// Index of the selected item in the full item list, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PortfolioItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Advances the active tag by one (wrapping) and restarts the fade.
    ///
    /// The selection survives the change when its item is still visible;
    /// otherwise it snaps to the first visible item.
    pub fn cycle_filter(&mut self, forward: bool) {
        if self.tags.len() < 2 {
            return;
        }
        let len = self.tags.len();
        self.active_tag = if forward {
            (self.active_tag + 1) % len
        } else {
            (self.active_tag + len - 1) % len
        };
        self.fade = Some(Duration::ZERO);
        let still_visible = self.selected.is_some_and(|i| self.is_visible(i));
        if !still_visible {
            self.selected = self.visible_indices().first().copied();
        }
    }

    /// Moves the selection to the next visible item, saturating at the
    /// last one.
    pub fn select_next(&mut self) {
        let visible = self.visible_indices();
        let Some(pos) = self.position_in(&visible) else {
            self.selected = visible.first().copied();
            return;
        };
        if pos + 1 < visible.len() {
            self.selected = Some(visible[pos + 1]);
        }
    }

    /// Moves the selection to the previous visible item, saturating at
    /// the first one.
    pub fn select_previous(&mut self) {
        let visible = self.visible_indices();
        let Some(pos) = self.position_in(&visible) else {
            self.selected = visible.first().copied();
            return;
        };
        if pos > 0 {
            self.selected = Some(visible[pos - 1]);
        }
    }

    fn position_in(&self, visible: &[usize]) -> Option<usize> {
        let selected = self.selected?;
        visible.iter().position(|&i| i == selected)
    }

    /// Advances the fade clock.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(elapsed) = self.fade.as_mut() {
            *elapsed += dt;
            if *elapsed >= FADE_DURATION {
                self.fade = None;
            }
        }
    }

    /// Fade-in progress in `[0, 1]`; `1.0` once settled.
    #[must_use]
    pub fn fade_progress(&self) -> f64 {
        match self.fade {
            None => 1.0,
            Some(elapsed) => {
                (elapsed.as_secs_f64() / FADE_DURATION.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Whether the post-filter fade is still running.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: category.to_string(),
        }
    }

    fn state() -> PortfolioState {
        PortfolioState::new(
            vec![
                item("fittrack", "app"),
                item("shopeasy", "web"),
                item("brandcard", "card"),
                item("taskflow", "app"),
            ],
            vec![
                "all".to_string(),
                "app".to_string(),
                "web".to_string(),
                "card".to_string(),
            ],
        )
    }

    #[test]
    fn test_all_tag_shows_everything() {
        let portfolio = state();
        assert_eq!(portfolio.active_tag(), Some("all"));
        assert_eq!(portfolio.visible_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_narrows_visible_items() {
        let mut portfolio = state();
        portfolio.cycle_filter(true);
        assert_eq!(portfolio.active_tag(), Some("app"));
        assert_eq!(portfolio.visible_indices(), vec![0, 3]);
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut portfolio = state();
        portfolio.cycle_filter(false);
        assert_eq!(portfolio.active_tag(), Some("card"));
        portfolio.cycle_filter(true);
        assert_eq!(portfolio.active_tag(), Some("all"));
    }

    #[test]
    fn test_selection_survives_when_still_visible() {
        let mut portfolio = state();
        portfolio.select_next();
        portfolio.select_next();
        portfolio.select_next();
        assert_eq!(portfolio.selected(), Some(3)); // taskflow (app)
        portfolio.cycle_filter(true); // -> app
        assert_eq!(portfolio.selected(), Some(3));
    }

    #[test]
    fn test_selection_snaps_to_first_visible_after_filter() {
        let mut portfolio = state();
        portfolio.select_next(); // shopeasy (web)
        assert_eq!(portfolio.selected(), Some(1));
        portfolio.cycle_filter(true); // -> app, shopeasy hidden
        assert_eq!(portfolio.selected(), Some(0));
    }

    #[test]
    fn test_selection_saturates_at_ends() {
        let mut portfolio = state();
        portfolio.select_previous();
        assert_eq!(portfolio.selected(), Some(0));
        for _ in 0..10 {
            portfolio.select_next();
        }
        assert_eq!(portfolio.selected(), Some(3));
    }

    #[test]
    fn test_selection_skips_hidden_items() {
        let mut portfolio = state();
        portfolio.cycle_filter(true); // app: indices 0 and 3
        assert_eq!(portfolio.selected(), Some(0));
        portfolio.select_next();
        assert_eq!(portfolio.selected(), Some(3));
    }

    #[test]
    fn test_filter_change_restarts_fade() {
        let mut portfolio = state();
        assert!(!portfolio.is_fading());
        portfolio.cycle_filter(true);
        assert!(portfolio.is_fading());
        assert_eq!(portfolio.fade_progress(), 0.0);
        portfolio.advance(Duration::from_millis(250));
        let p = portfolio.fade_progress();
        assert!((p - 0.5).abs() < 0.01, "expected ~0.5, got {p}");
        portfolio.advance(Duration::from_millis(250));
        assert!(!portfolio.is_fading());
        assert_eq!(portfolio.fade_progress(), 1.0);
    }

    #[test]
    fn test_single_tag_disables_cycling() {
        let mut portfolio = PortfolioState::new(vec![item("a", "app")], vec!["all".to_string()]);
        portfolio.cycle_filter(true);
        assert_eq!(portfolio.active_tag(), Some("all"));
        assert!(!portfolio.is_fading());
    }

    #[test]
    fn test_empty_items_have_no_selection() {
        let portfolio = PortfolioState::new(Vec::new(), vec!["all".to_string()]);
        assert_eq!(portfolio.selected(), None);
        assert!(portfolio.visible_indices().is_empty());
    }
}

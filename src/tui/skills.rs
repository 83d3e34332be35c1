//! Skill bars that fill when scrolled into view.
//!
//! Every bar starts empty. An observation pass runs after each scroll,
//! resize, or theme refresh: a bar whose rows are at least half inside
//! the viewport starts a one-shot eased fill toward its target percent.
//! Once started the fill runs to completion even if the bar scrolls back
//! out, and a finished bar never replays.

use std::time::Duration;

use super::page::ease_out_cubic;

/// Duration of the fill animation.
pub const FILL_DURATION: Duration = Duration::from_millis(900);
/// Rows of section chrome above the first skill (header + blank line).
pub const HEADER_ROWS: usize = 2;
/// Rows each skill occupies on the page (label row + bar row).
pub const ROWS_PER_SKILL: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Waiting,
    Filling(Duration),
    Done,
}

/// Reveal state for every skill bar, in the order the skills are listed.
#[derive(Debug, Clone)]
pub struct SkillBars {
    targets: Vec<u8>,
    states: Vec<RevealState>,
}

impl SkillBars {
    /// Creates bars for the given target percents. Targets above 100 are
    /// clamped.
    #[must_use]
    pub fn new(targets: Vec<u8>) -> Self {
        let targets: Vec<u8> = targets.into_iter().map(|t| t.min(100)).collect();
        let states = vec![RevealState::Waiting; targets.len()];
        Self { targets, states }
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether there are no bars at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Runs one observation pass against the current viewport.
    ///
    /// `section_top` is the page row of the skills section; the viewport
    /// covers rows `[viewport_top, viewport_top + viewport_height)`. A
    /// waiting bar with at least half of its rows visible starts
    /// filling. Bars already filling or done are left alone.
    pub fn observe(&mut self, section_top: usize, viewport_top: usize, viewport_height: usize) {
        let viewport_end = viewport_top + viewport_height;
        for (i, state) in self.states.iter_mut().enumerate() {
            if *state != RevealState::Waiting {
                continue;
            }
            let top = section_top + HEADER_ROWS + i * ROWS_PER_SKILL;
            let bottom = top + ROWS_PER_SKILL;
            let visible = bottom.min(viewport_end).saturating_sub(top.max(viewport_top));
            if visible * 2 >= ROWS_PER_SKILL {
                *state = RevealState::Filling(Duration::ZERO);
            }
        }
    }

    /// Advances every in-flight fill by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for state in &mut self.states {
            if let RevealState::Filling(elapsed) = state {
                *elapsed += dt;
                if *elapsed >= FILL_DURATION {
                    *state = RevealState::Done;
                }
            }
        }
    }

    /// Target percent for bar `i` (what the label prints).
    #[must_use]
    pub fn target_percent(&self, i: usize) -> u8 {
        self.targets.get(i).copied().unwrap_or(0)
    }

    /// Percent currently rendered for bar `i`: zero while waiting, an
    /// eased ramp while filling, the target once done.
    #[must_use]
    pub fn displayed_percent(&self, i: usize) -> u8 {
        let target = f64::from(self.target_percent(i));
        match self.states.get(i) {
            None | Some(RevealState::Waiting) => 0,
            Some(RevealState::Filling(elapsed)) => {
                let t = elapsed.as_secs_f64() / FILL_DURATION.as_secs_f64();
                (target * ease_out_cubic(t.min(1.0))).round() as u8
            }
            Some(RevealState::Done) => target as u8,
        }
    }

    /// Whether bar `i` has started (or finished) its fill.
    #[must_use]
    pub fn has_started(&self, i: usize) -> bool {
        !matches!(self.states.get(i), None | Some(RevealState::Waiting))
    }

    /// Whether bar `i` has finished filling.
    #[must_use]
    pub fn is_settled(&self, i: usize) -> bool {
        matches!(self.states.get(i), Some(RevealState::Done))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> SkillBars {
        SkillBars::new(vec![90, 75, 60])
    }

    #[test]
    fn test_bars_start_empty() {
        let bars = bars();
        for i in 0..bars.len() {
            assert_eq!(bars.displayed_percent(i), 0);
            assert!(!bars.has_started(i));
        }
    }

    #[test]
    fn test_observe_starts_visible_bars() {
        let mut bars = bars();
        // Section at row 10; bar 0 spans rows 12-13, bar 1 rows 14-15,
        // bar 2 rows 16-17. Viewport covers rows 0-14.
        bars.observe(10, 0, 15);
        assert!(bars.has_started(0));
        assert!(bars.has_started(1)); // one of two rows visible = 50%
        assert!(!bars.has_started(2));
    }

    #[test]
    fn test_observe_ignores_offscreen_bars() {
        let mut bars = bars();
        bars.observe(100, 0, 20);
        for i in 0..bars.len() {
            assert!(!bars.has_started(i));
        }
    }

    #[test]
    fn test_fill_completes_at_target() {
        let mut bars = bars();
        bars.observe(0, 0, 30);
        bars.advance(FILL_DURATION);
        assert_eq!(bars.displayed_percent(0), 90);
        assert_eq!(bars.displayed_percent(1), 75);
        assert!(bars.is_settled(0));
    }

    #[test]
    fn test_fill_ramps_through_intermediate_values() {
        let mut bars = bars();
        bars.observe(0, 0, 30);
        bars.advance(Duration::from_millis(300));
        let mid = bars.displayed_percent(0);
        assert!(mid > 0 && mid < 90, "expected partial fill, got {mid}");
        // Ease-out front-loads the motion
        assert!(mid > 30, "expected front-loaded ramp, got {mid}");
    }

    #[test]
    fn test_fill_continues_after_scrolling_away() {
        let mut bars = bars();
        bars.observe(0, 0, 30);
        bars.advance(Duration::from_millis(200));
        // No further observe calls: the fill keeps running regardless
        bars.advance(FILL_DURATION);
        assert!(bars.is_settled(0));
        assert_eq!(bars.displayed_percent(0), 90);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut bars = bars();
        bars.observe(0, 0, 30);
        bars.advance(FILL_DURATION);
        // Scrolling away and back does not replay the animation
        bars.observe(0, 0, 30);
        bars.advance(Duration::from_millis(100));
        assert_eq!(bars.displayed_percent(0), 90);
        assert!(bars.is_settled(0));
    }

    #[test]
    fn test_targets_clamped_to_hundred() {
        let bars = SkillBars::new(vec![250]);
        assert_eq!(bars.target_percent(0), 100);
    }

    #[test]
    fn test_out_of_range_index_is_zero() {
        let bars = bars();
        assert_eq!(bars.displayed_percent(99), 0);
        assert_eq!(bars.target_percent(99), 0);
    }
}

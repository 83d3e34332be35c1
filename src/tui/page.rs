//! Vertical page model: stacked section layout, scroll state with a
//! smooth glide, and the scroll-spy probe that decides which section is
//! "active".
//!
//! The page is a single tall column of rows. Sections are stacked with a
//! one-row gap; the viewport shows a window of `viewport_height` rows
//! starting at the scroll offset. Jumping to a section glides the offset
//! there with an ease-out ramp instead of teleporting.

use std::time::Duration;

use crate::content::SectionId;

/// Duration of an animated jump between scroll positions.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);
/// The scroll-spy samples the row this far below the viewport top.
pub const SCROLL_SPY_PROBE_ROWS: usize = 5;
/// Blank rows between adjacent sections.
pub const SECTION_GAP: usize = 1;

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Row span of one section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Which section this is.
    pub id: SectionId,
    /// First page row of the section.
    pub top: usize,
    /// Number of rows the section occupies.
    pub height: usize,
}

impl SectionBounds {
    /// Whether `row` falls inside this section's span.
    #[must_use]
    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// The computed row layout of the whole page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Section spans in page order.
    pub sections: Vec<SectionBounds>,
    /// Total page height in rows, gaps included.
    pub total_height: usize,
}

impl PageLayout {
    /// Stacks sections top to bottom with [`SECTION_GAP`] rows between
    /// neighbors.
    #[must_use]
    pub fn stack(heights: &[(SectionId, usize)]) -> Self {
        let mut sections = Vec::with_capacity(heights.len());
        let mut top = 0usize;
        for (i, &(id, height)) in heights.iter().enumerate() {
            if i > 0 {
                top += SECTION_GAP;
            }
            sections.push(SectionBounds { id, top, height });
            top += height;
        }
        Self {
            sections,
            total_height: top,
        }
    }

    /// Bounds of `id`, if the page contains it.
    #[must_use]
    pub fn bounds_of(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// First page row of `id`, if present.
    #[must_use]
    pub fn top_of(&self, id: SectionId) -> Option<usize> {
        self.bounds_of(id).map(|s| s.top)
    }

    /// The section containing `row`. When spans overlap the later
    /// section wins; a row in a gap (or past the end) belongs to none.
    #[must_use]
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections
            .iter()
            .filter(|s| s.contains(row))
            .next_back()
            .map(|s| s.id)
    }
}

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: usize,
    to: usize,
    elapsed: Duration,
}

/// Scroll offset with clamping and an optional in-flight glide.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset: usize,
    max_offset: usize,
    glide: Option<Glide>,
}

impl PageScroll {
    /// Current scroll offset (the page row at the viewport top).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest reachable offset for the current bounds.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Recomputes the clamp range after the page or viewport changed,
    /// pulling the offset and any glide target back into range.
    pub fn set_bounds(&mut self, total_height: usize, viewport_height: usize) {
        self.max_offset = total_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
        if let Some(glide) = self.glide.as_mut() {
            glide.from = glide.from.min(self.max_offset);
            glide.to = glide.to.min(self.max_offset);
        }
    }

    /// Moves immediately by `delta` rows, cancelling any glide.
    pub fn scroll_by(&mut self, delta: isize) {
        self.glide = None;
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset);
    }

    /// Teleports to `row` (clamped), cancelling any glide.
    pub fn jump_to(&mut self, row: usize) {
        self.glide = None;
        self.offset = row.min(self.max_offset);
    }

    /// Starts an eased glide toward `row` (clamped). Gliding to the
    /// current offset is a no-op.
    pub fn glide_to(&mut self, row: usize) {
        let to = row.min(self.max_offset);
        if to == self.offset {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            from: self.offset,
            to,
            elapsed: Duration::ZERO,
        });
    }

    /// Whether a glide is in flight.
    #[must_use]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Advances an in-flight glide by `dt`. Returns whether the offset
    /// moved, so the caller can rerun visibility passes.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(glide) = self.glide.as_mut() else {
            return false;
        };
        glide.elapsed += dt;
        let t = glide.elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64();
        if t >= 1.0 {
            let to = glide.to;
            self.glide = None;
            let moved = self.offset != to;
            self.offset = to;
            return moved;
        }
        let eased = ease_out_cubic(t);
        let from = glide.from as f64;
        let to = glide.to as f64;
        let next = (from + (to - from) * eased).round() as usize;
        let moved = next != self.offset;
        self.offset = next.min(self.max_offset);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::stack(&[
            (SectionId::Home, 14),
            (SectionId::About, 10),
            (SectionId::Skills, 14),
        ])
    }

    #[test]
    fn test_stack_positions_with_gaps() {
        let page = layout();
        assert_eq!(page.top_of(SectionId::Home), Some(0));
        assert_eq!(page.top_of(SectionId::About), Some(15));
        assert_eq!(page.top_of(SectionId::Skills), Some(26));
        assert_eq!(page.total_height, 40);
    }

    #[test]
    fn test_section_at_boundaries() {
        let page = layout();
        assert_eq!(page.section_at(0), Some(SectionId::Home));
        assert_eq!(page.section_at(13), Some(SectionId::Home));
        // Row 14 is the gap between Home and About
        assert_eq!(page.section_at(14), None);
        assert_eq!(page.section_at(15), Some(SectionId::About));
        assert_eq!(page.section_at(39), Some(SectionId::Skills));
        assert_eq!(page.section_at(40), None);
    }

    #[test]
    fn test_overlapping_spans_later_wins() {
        let page = PageLayout {
            sections: vec![
                SectionBounds {
                    id: SectionId::Home,
                    top: 0,
                    height: 20,
                },
                SectionBounds {
                    id: SectionId::About,
                    top: 10,
                    height: 20,
                },
            ],
            total_height: 30,
        };
        assert_eq!(page.section_at(15), Some(SectionId::About));
        assert_eq!(page.section_at(5), Some(SectionId::Home));
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.scroll_by(500);
        assert_eq!(scroll.offset(), 70);
        scroll.scroll_by(-500);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_short_page_never_scrolls() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(10, 30);
        scroll.scroll_by(5);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.max_offset(), 0);
    }

    #[test]
    fn test_set_bounds_pulls_offset_back() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.jump_to(70);
        scroll.set_bounds(50, 30);
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_glide_reaches_target() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.glide_to(50);
        assert!(scroll.is_gliding());
        scroll.advance(SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset(), 50);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn test_glide_is_eased_not_linear() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(200, 30);
        scroll.glide_to(100);
        scroll.advance(Duration::from_millis(200));
        // Half the time should cover well over half the distance
        assert!(scroll.offset() > 60, "offset {} not eased", scroll.offset());
        assert!(scroll.offset() < 100);
    }

    #[test]
    fn test_manual_scroll_cancels_glide() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.glide_to(50);
        scroll.advance(Duration::from_millis(100));
        scroll.scroll_by(1);
        assert!(!scroll.is_gliding());
        let frozen = scroll.offset();
        assert!(!scroll.advance(Duration::from_millis(300)));
        assert_eq!(scroll.offset(), frozen);
    }

    #[test]
    fn test_glide_to_current_offset_is_noop() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.glide_to(0);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn test_glide_target_clamped() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        scroll.glide_to(500);
        scroll.advance(SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset(), 70);
    }

    #[test]
    fn test_advance_reports_movement() {
        let mut scroll = PageScroll::default();
        scroll.set_bounds(100, 30);
        assert!(!scroll.advance(Duration::from_millis(50)));
        scroll.glide_to(40);
        assert!(scroll.advance(Duration::from_millis(200)));
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert!(ease_out_cubic(0.0).abs() < 1e-9);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-9);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}

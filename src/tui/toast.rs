//! Transient toast notifications.
//!
//! A single-slot presenter: showing a new toast replaces whatever is on
//! screen, so rapid triggers never queue up. Each toast slides in from
//! the right edge, stays visible, then slides back out and disappears on
//! its own. Severity only affects the colors and the leading glyph.

use std::time::Duration;

use ratatui::style::Color;

/// Slide-in and slide-out duration.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);
/// How long a toast stays fully visible between the slides.
pub const VISIBLE_DURATION: Duration = Duration::from_millis(4000);

/// Severity of a toast, mapped to color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Neutral informational message (teal).
    Info,
    /// Success confirmation (green).
    Success,
    /// Error or validation failure (red).
    Error,
}

impl ToastSeverity {
    /// Background color for the toast box.
    #[must_use]
    pub const fn background(self) -> Color {
        match self {
            Self::Info => Color::Rgb(0x17, 0xa2, 0xb8),
            Self::Success => Color::Rgb(0x28, 0xa7, 0x45),
            Self::Error => Color::Rgb(0xdc, 0x35, 0x45),
        }
    }

    /// Leading glyph shown before the message.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Info => "○",
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastPhase {
    SlidingIn,
    Visible,
    SlidingOut,
}

/// The toast currently on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message text.
    pub message: String,
    /// Severity (colors + glyph).
    pub severity: ToastSeverity,
    phase: ToastPhase,
    elapsed: Duration,
}

impl Toast {
    /// Fraction of the toast width currently on screen, in `[0, 1]`.
    ///
    /// Ramps up during slide-in, holds at 1 while visible, ramps down
    /// during slide-out.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let ratio = self.elapsed.as_secs_f64() / SLIDE_DURATION.as_secs_f64();
        match self.phase {
            ToastPhase::SlidingIn => ratio.min(1.0),
            ToastPhase::Visible => 1.0,
            ToastPhase::SlidingOut => (1.0 - ratio).max(0.0),
        }
    }

    /// Whether the toast is in its fully-visible hold phase.
    #[must_use]
    pub fn is_fully_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

/// Owns the single toast slot and its lifecycle timing.
#[derive(Debug, Clone, Default)]
pub struct ToastPresenter {
    current: Option<Toast>,
}

impl ToastPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, replacing any toast already on screen.
    ///
    /// The replacement restarts the slide-in from the beginning.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            phase: ToastPhase::SlidingIn,
            elapsed: Duration::ZERO,
        });
    }

    /// The toast currently on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Advances the lifecycle by `dt`, retiring the toast once the
    /// slide-out completes. A large `dt` crosses phases in one call.
    pub fn advance(&mut self, dt: Duration) {
        let Some(toast) = self.current.as_mut() else {
            return;
        };
        let mut remaining = dt;
        loop {
            let phase_total = match toast.phase {
                ToastPhase::SlidingIn | ToastPhase::SlidingOut => SLIDE_DURATION,
                ToastPhase::Visible => VISIBLE_DURATION,
            };
            let left_in_phase = phase_total.saturating_sub(toast.elapsed);
            if remaining < left_in_phase {
                toast.elapsed += remaining;
                return;
            }
            remaining -= left_in_phase;
            toast.elapsed = Duration::ZERO;
            toast.phase = match toast.phase {
                ToastPhase::SlidingIn => ToastPhase::Visible,
                ToastPhase::Visible => ToastPhase::SlidingOut,
                ToastPhase::SlidingOut => {
                    self.current = None;
                    return;
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_current() {
        let mut toasts = ToastPresenter::new();
        assert!(toasts.current().is_none());
        toasts.show("Saved", ToastSeverity::Success);
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "Saved");
        assert_eq!(toast.severity, ToastSeverity::Success);
    }

    #[test]
    fn test_new_toast_replaces_previous() {
        let mut toasts = ToastPresenter::new();
        toasts.show("First", ToastSeverity::Info);
        toasts.advance(Duration::from_millis(500));
        toasts.show("Second", ToastSeverity::Error);
        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "Second");
        // Replacement restarts the slide-in
        assert!(!toast.is_fully_visible());
        assert!(toast.progress() < 0.01);
    }

    #[test]
    fn test_slide_in_progress_ramps_up() {
        let mut toasts = ToastPresenter::new();
        toasts.show("Hi", ToastSeverity::Info);
        toasts.advance(Duration::from_millis(150));
        let p = toasts.current().unwrap().progress();
        assert!((p - 0.5).abs() < 0.01, "expected ~0.5, got {p}");
    }

    #[test]
    fn test_full_lifecycle_retires_toast() {
        let mut toasts = ToastPresenter::new();
        toasts.show("Bye", ToastSeverity::Info);
        // 300ms in + 4000ms visible + 300ms out
        toasts.advance(Duration::from_millis(300));
        assert!(toasts.current().unwrap().is_fully_visible());
        toasts.advance(Duration::from_millis(4000));
        assert!(!toasts.current().unwrap().is_fully_visible());
        toasts.advance(Duration::from_millis(300));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_large_dt_crosses_every_phase() {
        let mut toasts = ToastPresenter::new();
        toasts.show("Gone", ToastSeverity::Success);
        toasts.advance(Duration::from_secs(10));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_slide_out_progress_ramps_down() {
        let mut toasts = ToastPresenter::new();
        toasts.show("Out", ToastSeverity::Info);
        toasts.advance(Duration::from_millis(4300));
        toasts.advance(Duration::from_millis(150));
        let p = toasts.current().unwrap().progress();
        assert!((p - 0.5).abs() < 0.01, "expected ~0.5, got {p}");
    }

    #[test]
    fn test_advance_without_toast_is_noop() {
        let mut toasts = ToastPresenter::new();
        toasts.advance(Duration::from_secs(5));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_severity_styling() {
        assert_eq!(ToastSeverity::Success.glyph(), "✓");
        assert_eq!(ToastSeverity::Error.glyph(), "✗");
        assert_eq!(ToastSeverity::Info.glyph(), "○");
        assert_ne!(
            ToastSeverity::Success.background(),
            ToastSeverity::Error.background()
        );
    }
}

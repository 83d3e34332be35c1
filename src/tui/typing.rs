//! Typewriter animation for the hero tagline.
//!
//! Cycles through a fixed list of phrases: each phrase is revealed one
//! character at a time, held fully visible, deleted one character at a
//! time, and then the loop advances to the next phrase (wrapping at the
//! end). The state machine is pure; the event loop feeds it elapsed time
//! via [`TypingAnimator::advance`] and the animator decides internally
//! when the next mutation is due.

use std::time::Duration;

/// Delay before the very first character appears.
pub const START_DELAY: Duration = Duration::from_millis(1000);
/// Interval between revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
/// Interval between deleted characters (deleting is twice as fast).
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
/// Hold time with the phrase fully visible before deletion starts.
pub const HOLD_PAUSE: Duration = Duration::from_millis(2000);
/// Pause on the empty string before the next phrase starts typing.
pub const ADVANCE_PAUSE: Duration = Duration::from_millis(500);

/// Typewriter state machine over a phrase list.
///
/// `char_index` counts characters (not bytes), so phrases with
/// multi-byte characters reveal one visible character per tick.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    until_next: Duration,
}

impl TypingAnimator {
    /// Creates an animator over `phrases`. An empty list disables the
    /// animation entirely; [`Self::visible_text`] then stays empty.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            until_next: START_DELAY,
        }
    }

    /// Whether the animator has any phrases to cycle through.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.phrases.is_empty()
    }

    /// The currently revealed prefix of the current phrase.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return String::new();
        };
        phrase.chars().take(self.char_index).collect()
    }

    /// Index of the phrase currently being typed or deleted.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Whether the animator is currently in the deleting half of the cycle.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Performs one mutation and returns the delay until the next one.
    ///
    /// Typing a character schedules [`TYPE_INTERVAL`], except the final
    /// character of a phrase which schedules [`HOLD_PAUSE`]. Deleting a
    /// character schedules [`DELETE_INTERVAL`], except the deletion that
    /// empties the line, which advances to the next phrase and schedules
    /// [`ADVANCE_PAUSE`].
    pub fn step(&mut self) -> Duration {
        let len = self
            .phrases
            .get(self.phrase_index)
            .map(|p| p.chars().count())
            .unwrap_or(0);

        if self.deleting {
            if self.char_index > 0 {
                self.char_index -= 1;
            }
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len().max(1);
                ADVANCE_PAUSE
            } else {
                DELETE_INTERVAL
            }
        } else {
            if self.char_index < len {
                self.char_index += 1;
            }
            if self.char_index >= len {
                self.deleting = true;
                HOLD_PAUSE
            } else {
                TYPE_INTERVAL
            }
        }
    }

    /// Consumes `dt` of wall-clock time, firing as many steps as fall due.
    ///
    /// A large `dt` (after a stall) fires several steps back to back, so
    /// the animation catches up instead of stretching.
    pub fn advance(&mut self, dt: Duration) {
        if !self.enabled() {
            return;
        }
        let mut remaining = dt;
        while remaining >= self.until_next {
            remaining -= self.until_next;
            self.until_next = self.step();
        }
        self.until_next -= remaining;
    }

    /// Time left until the next mutation fires.
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.until_next
    }
}

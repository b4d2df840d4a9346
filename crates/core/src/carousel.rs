//! Slide rotation state machine.
//!
//! Drives the hero and testimonial carousels. Time is passed in by the
//! caller through [`Carousel::tick`] so the same logic works on the server
//! (to pick the slide for a `?slide=N` request) and in tests.
//!
//! ```text
//!            next/prev/go_to (unlocked, index changes)
//!   Idle ─────────────────────────────────────────────▶ Transitioning
//!    ▲  │ autoplay interval elapsed                          │
//!    │  └──────────────────────────▶ Transitioning           │
//!    └───────────────────────────────────────────────────────┘
//!                       TRANSITION elapsed
//! ```
//!
//! While transitioning every manual move is rejected and autoplay waits.

use std::time::Duration;

/// Time between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Length of the slide animation; moves are locked out for this long.
pub const TRANSITION: Duration = Duration::from_millis(500);

/// Position within an ordered list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    transitioning: bool,
    /// Time since the last move (manual or automatic).
    since_move: Duration,
    /// Time since the current transition started.
    in_transition: Duration,
}

impl Carousel {
    /// A carousel over `len` slides, showing the first.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            transitioning: false,
            since_move: Duration::ZERO,
            in_transition: Duration::ZERO,
        }
    }

    /// A carousel showing `requested`, clamped into bounds.
    ///
    /// Used for server-rendered `?slide=N` links.
    #[must_use]
    pub fn at(len: usize, requested: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.index = requested.min(len.saturating_sub(1));
        carousel
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the displayed slide, `None` when empty.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    /// Whether a transition is in progress.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Index `next()` would move to.
    #[must_use]
    pub const fn next_index(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some((self.index + 1) % self.len)
        }
    }

    /// Index `prev()` would move to.
    #[must_use]
    pub const fn prev_index(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some((self.index + self.len - 1) % self.len)
        }
    }

    /// Advance one slide, wrapping. Returns whether the carousel moved.
    pub fn next(&mut self) -> bool {
        self.next_index().is_some_and(|i| self.move_to(i))
    }

    /// Go back one slide, wrapping. Returns whether the carousel moved.
    pub fn prev(&mut self) -> bool {
        self.prev_index().is_some_and(|i| self.move_to(i))
    }

    /// Jump to `index` (indicator click). Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        index < self.len && self.move_to(index)
    }

    /// Let `elapsed` pass. Returns whether autoplay advanced.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.len < 2 {
            return false;
        }

        self.since_move = self.since_move.saturating_add(elapsed);

        if self.transitioning {
            self.in_transition = self.in_transition.saturating_add(elapsed);
            if self.in_transition < TRANSITION {
                return false;
            }
            self.transitioning = false;
            self.in_transition = Duration::ZERO;
        }

        if self.since_move >= AUTOPLAY_INTERVAL {
            return self.next();
        }
        false
    }

    fn move_to(&mut self, index: usize) -> bool {
        if self.transitioning || index == self.index {
            return false;
        }
        self.index = index;
        self.transitioning = true;
        self.in_transition = Duration::ZERO;
        self.since_move = Duration::ZERO;
        true
    }
}

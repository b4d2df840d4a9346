//! Primary / fallback / placeholder image selection.
//!
//! An image is first shown from its primary URL. The first load failure
//! swaps to the fallback URL; the second settles on a static placeholder.
//! There is no retry.

use serde::Serialize;

/// Which source an image is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageState {
    Primary,
    Fallback,
    Placeholder,
}

/// Load-failure tracking for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback<'a> {
    primary: &'a str,
    fallback: &'a str,
    state: ImageState,
    failures: u8,
}

impl<'a> ImageFallback<'a> {
    #[must_use]
    pub const fn new(primary: &'a str, fallback: &'a str) -> Self {
        Self {
            primary,
            fallback,
            state: ImageState::Primary,
            failures: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ImageState {
        self.state
    }

    /// Failures recorded so far (at most 2).
    #[must_use]
    pub const fn failures(&self) -> u8 {
        self.failures
    }

    /// Source to display, `None` once the placeholder is showing.
    #[must_use]
    pub const fn current_src(&self) -> Option<&'a str> {
        match self.state {
            ImageState::Primary => Some(self.primary),
            ImageState::Fallback => Some(self.fallback),
            ImageState::Placeholder => None,
        }
    }

    /// Record a load failure of the current source and return the new state.
    ///
    /// A fallback identical to the primary is skipped: it would fail too.
    /// Errors reported while the placeholder shows are not counted.
    pub fn on_error(&mut self) -> ImageState {
        if self.state == ImageState::Placeholder {
            return self.state;
        }
        self.state = match self.state {
            ImageState::Primary if self.fallback != self.primary && !self.fallback.is_empty() => {
                ImageState::Fallback
            }
            ImageState::Primary | ImageState::Fallback | ImageState::Placeholder => {
                ImageState::Placeholder
            }
        };
        self.failures = self.failures.saturating_add(1).min(2);
        self.state
    }

    /// Run the state machine against a predicate that says whether a source
    /// loads, and return the settled state.
    pub fn resolve(&mut self, mut loads: impl FnMut(&str) -> bool) -> ImageState {
        while let Some(src) = self.current_src() {
            if loads(src) {
                break;
            }
            self.on_error();
        }
        self.state
    }
}

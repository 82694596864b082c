// ABOUTME: Slide navigation state machine
// ABOUTME: Tracks the visible slide and derives button and pagination state from it

use crate::errors::{Result, ShowcaseError};
use log::debug;

/// Step direction for `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of a successful navigation, describing the side effects the UI
/// has to apply when switching slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// Pause and rewind any playing video before switching.
    pub reset_media: bool,
    pub scroll_to_top: bool,
}

/// Enabled/disabled state of the four navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

/// One clickable marker in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationIndicator {
    pub index: usize,
    /// 1-based label shown to the user.
    pub number: usize,
    pub active: bool,
}

/// Which slide is visible. `total_slides == 0` means no content has been
/// loaded yet and every operation is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorState {
    current_slide: usize,
    total_slides: usize,
}

impl NavigatorState {
    pub fn new(total_slides: usize) -> Self {
        Self {
            current_slide: 0,
            total_slides,
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn is_loaded(&self) -> bool {
        self.total_slides > 0
    }

    pub fn is_first(&self) -> bool {
        self.current_slide == 0
    }

    pub fn is_last(&self) -> bool {
        self.is_loaded() && self.current_slide == self.total_slides - 1
    }

    /// Step one slide, wrapping past either end.
    pub fn advance(&mut self, direction: Direction) -> Option<Transition> {
        if !self.is_loaded() {
            return None;
        }

        let from = self.current_slide;
        let to = match direction {
            Direction::Next => (from + 1) % self.total_slides,
            Direction::Previous => (from + self.total_slides - 1) % self.total_slides,
        };
        self.current_slide = to;
        debug!("Advanced {:?} from slide {} to {}", direction, from, to);

        Some(Transition {
            from,
            to,
            reset_media: true,
            scroll_to_top: true,
        })
    }

    /// Show the slide at `index` directly. Indices outside the loaded range
    /// are rejected and leave the state untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<Option<Transition>> {
        if !self.is_loaded() {
            return Ok(None);
        }
        if index >= self.total_slides {
            return Err(ShowcaseError::SlideOutOfRange {
                index,
                total: self.total_slides,
            });
        }

        let from = self.current_slide;
        self.current_slide = index;
        debug!("Jumped from slide {} to {}", from, index);

        Ok(Some(Transition {
            from,
            to: index,
            reset_media: false,
            scroll_to_top: true,
        }))
    }

    pub fn first(&mut self) -> Option<Transition> {
        self.jump_to(0).ok().flatten()
    }

    pub fn last(&mut self) -> Option<Transition> {
        let last = self.total_slides.checked_sub(1)?;
        self.jump_to(last).ok().flatten()
    }

    /// Button state for the current slide; `None` while nothing is loaded,
    /// in which case the buttons are not shown at all.
    pub fn controls(&self) -> Option<NavControls> {
        if !self.is_loaded() {
            return None;
        }
        Some(NavControls {
            first_disabled: self.is_first(),
            prev_disabled: self.is_first(),
            next_disabled: self.is_last(),
            last_disabled: self.is_last(),
        })
    }

    /// One indicator per slide, the current one marked active.
    pub fn pagination(&self) -> Vec<PaginationIndicator> {
        (0..self.total_slides)
            .map(|index| PaginationIndicator {
                index,
                number: index + 1,
                active: index == self.current_slide,
            })
            .collect()
    }

    /// Keep the current index if it still fits a new slide count, otherwise
    /// fall back to the first slide.
    pub fn resized(&self, total_slides: usize) -> Self {
        let current_slide = if self.current_slide < total_slides {
            self.current_slide
        } else {
            0
        };
        Self {
            current_slide,
            total_slides,
        }
    }
}

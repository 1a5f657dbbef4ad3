// SPDX-License-Identifier: MPL-2.0
//! Scroll-to-travel mapping for the horizontal gallery strip.
//!
//! Vertical wheel input accumulates into a virtual scroll position. The
//! position maps 1:1 onto a horizontal offset, clamped to the strip's total
//! travel. The mapping is direct and un-damped: the offset read each driver
//! tick is a pure function of the current position, so there is no drift
//! across ticks.

use iced::mouse::ScrollDelta;
use iced::Size;

/// Geometry and virtual scroll position of the strip.
///
/// `total_travel` is the horizontal distance the strip must move to reveal
/// its full width inside the viewport. The virtual scrollable height is
/// `total_travel + viewport_height`, giving a one-viewport settle margin at
/// each end so the position maps 1:1 to the offset.
#[derive(Debug, Clone)]
pub struct ScrubState {
    viewport: Size,
    strip_width: f32,
    position: f32,
}

impl ScrubState {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            strip_width: 0.0,
            position: 0.0,
        }
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn set_strip_width(&mut self, width: f32) {
        self.strip_width = width.max(0.0);
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Horizontal distance needed to reveal the full strip. Never negative,
    /// even when the strip fits inside the viewport.
    #[must_use]
    pub fn total_travel(&self) -> f32 {
        (self.strip_width - self.viewport.width).max(0.0)
    }

    /// Height the virtual scroll area would occupy: travel plus one viewport.
    #[must_use]
    pub fn virtual_height(&self) -> f32 {
        self.total_travel() + self.viewport.height
    }

    /// The clamped horizontal offset for the current position.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.position.clamp(0.0, self.total_travel())
    }

    /// Offset as a fraction of total travel, in `[0, 1]`. Zero when the strip
    /// has no travel.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let travel = self.total_travel();
        if travel > 0.0 {
            self.offset() / travel
        } else {
            0.0
        }
    }

    /// Accumulates wheel travel into the position, kept within bounds so
    /// overshoot does not build up a backlog the user must scroll through.
    pub fn scroll_by(&mut self, delta: f32) {
        self.position = (self.position + delta).clamp(0.0, self.total_travel());
    }

    /// Sets the raw position. Unlike [`ScrubState::scroll_by`] the value is
    /// stored unclamped; [`ScrubState::offset`] clamps on read.
    pub fn set_position(&mut self, position: f32) {
        self.position = position;
    }
}

/// Converts a wheel delta to pixels of travel. Scrolling down moves the
/// strip forward.
#[must_use]
pub fn wheel_travel(delta: ScrollDelta, line_step: f32) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * line_step,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

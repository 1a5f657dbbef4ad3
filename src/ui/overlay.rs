// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine: `Closed`/`Open` plus a generation-guarded
//! deferred clear of the displayed record.
//!
//! Closing keeps the record around for the dismiss delay so a departing
//! transition has something to draw, then clears it. Every close bumps a
//! generation counter; a deferred clear whose generation no longer matches
//! the latest close is discarded, so reopening within the delay never blanks
//! the freshly opened image.

use crate::app::Message;
use crate::catalog::PanelEntry;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, Column, Container, Space, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::time::Duration;

/// Default delay before the dismissed record is cleared.
pub const DISMISS_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stage {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    stage: Stage,
    shown: Option<usize>,
    generation: u64,
}

impl Lightbox {
    /// Opens the lightbox on the panel at `index`. Opening while already open
    /// simply switches the displayed record.
    pub fn open(&mut self, index: usize) {
        self.stage = Stage::Open;
        self.shown = Some(index);
    }

    /// Closes the lightbox and returns the generation to hand to the deferred
    /// clear. Returns `None` when already closed; nothing should be scheduled
    /// in that case.
    pub fn close(&mut self) -> Option<u64> {
        if self.stage == Stage::Closed {
            return None;
        }
        self.stage = Stage::Closed;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    /// Completes a dismissal started by [`Lightbox::close`]. Clears the
    /// retained record only if the lightbox is still closed and no newer
    /// close has superseded this one.
    pub fn finish_dismiss(&mut self, generation: u64) {
        if self.stage == Stage::Closed && generation == self.generation {
            self.shown = None;
        }
    }

    /// Whether the lightbox is open; background scroll is locked while true.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.stage == Stage::Open
    }

    /// The panel index currently shown, if the lightbox is open.
    #[must_use]
    pub fn visible_panel(&self) -> Option<usize> {
        match self.stage {
            Stage::Open => self.shown,
            Stage::Closed => None,
        }
    }

    /// The retained record, including one waiting out the dismiss delay.
    #[must_use]
    pub fn retained_panel(&self) -> Option<usize> {
        self.shown
    }
}

/// Full-window lightbox layer for the given panel.
///
/// The backdrop closes on press. The enlarged image and the caption capture
/// their own presses so only clicks outside the content dismiss.
pub fn view(entry: &PanelEntry) -> Element<'_, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::DismissLightbox);

    let image = mouse_area(
        Image::new(entry.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::LightboxImagePressed);

    let caption = mouse_area(
        Text::new(entry.lightbox_caption()).size(typography::TITLE_SM),
    )
    .on_press(Message::LightboxImagePressed);

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(image)
            .push(caption),
    )
    .padding(spacing::XXL)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    let close = Container::new(
        button(Text::new("\u{2715}").size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::close_button())
            .on_press(Message::DismissLightbox),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Right);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content)
        .push(close)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_requested_panel() {
        let mut lightbox = Lightbox::default();
        lightbox.open(3);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.visible_panel(), Some(3));
    }

    #[test]
    fn close_retains_record_until_dismiss_settles() {
        let mut lightbox = Lightbox::default();
        lightbox.open(1);
        let generation = lightbox.close().expect("close should schedule");

        assert!(!lightbox.is_open());
        assert_eq!(lightbox.visible_panel(), None);
        assert_eq!(lightbox.retained_panel(), Some(1));

        lightbox.finish_dismiss(generation);
        assert_eq!(lightbox.retained_panel(), None);
    }

    #[test]
    fn close_when_already_closed_is_a_no_op() {
        let mut lightbox = Lightbox::default();
        assert_eq!(lightbox.close(), None);

        lightbox.open(0);
        lightbox.close().expect("first close");
        assert_eq!(lightbox.close(), None);
    }

    #[test]
    fn rapid_reopen_keeps_image_through_stale_dismiss() {
        let mut lightbox = Lightbox::default();
        lightbox.open(2);
        let generation = lightbox.close().expect("close should schedule");
        lightbox.open(2);

        // Deferred clear from the earlier close fires while open again.
        lightbox.finish_dismiss(generation);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.visible_panel(), Some(2));
    }

    #[test]
    fn stale_generation_never_clears_a_newer_dismissal() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0);
        let first = lightbox.close().expect("first close");
        lightbox.open(5);
        let second = lightbox.close().expect("second close");

        lightbox.finish_dismiss(first);
        assert_eq!(lightbox.retained_panel(), Some(5));

        lightbox.finish_dismiss(second);
        assert_eq!(lightbox.retained_panel(), None);
    }

    #[test]
    fn reopening_switches_the_displayed_record() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0);
        lightbox.open(4);
        assert_eq!(lightbox.visible_panel(), Some(4));
    }
}

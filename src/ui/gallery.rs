// SPDX-License-Identifier: MPL-2.0
//! The horizontal strip of captioned panels.
//!
//! The strip is a horizontal scrollable with hidden scrollbars, wrapped in
//! [`wheel_inert`] so the wheel feeds the scrub driver instead of the
//! scrollable itself; the driver positions the strip through a snap
//! operation addressed by [`STRIP_ID`]. Layout is deterministic: panel
//! height is a fixed fraction of the viewport, width follows the image
//! aspect ratio, so the strip width and travel can be computed without
//! measuring the widget tree.

use crate::app::Message;
use crate::catalog::PanelEntry;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::wheel_inert;
use iced::alignment::Vertical;
use iced::mouse;
use iced::widget::image::Image;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length, Padding, Size};

/// Identifier used to address the strip scrollable from snap operations.
pub const STRIP_ID: &str = "gallery-strip";

/// Panel height as a fraction of the viewport height.
pub const PANEL_HEIGHT_RATIO: f32 = 0.68;

/// Horizontal gap between adjacent panels.
pub const PANEL_GAP: f32 = spacing::LG;

/// Padding before the first and after the last panel.
pub const EDGE_PADDING: f32 = spacing::XL;

/// Floor for panel widths so extreme portrait images stay clickable.
pub const MIN_PANEL_WIDTH: f32 = 160.0;

/// Display size of one panel for the given image aspect and viewport.
#[must_use]
pub fn panel_size(aspect: f32, viewport: Size) -> Size {
    let height = (viewport.height * PANEL_HEIGHT_RATIO).max(1.0);
    let width = (height * aspect).max(MIN_PANEL_WIDTH);
    Size::new(width, height)
}

/// Total width the strip occupies: panels, gaps, and edge padding.
/// Zero for an empty catalog.
#[must_use]
pub fn strip_width(aspects: &[f32], viewport: Size) -> f32 {
    if aspects.is_empty() {
        return 0.0;
    }
    let panels: f32 = aspects
        .iter()
        .map(|aspect| panel_size(*aspect, viewport).width)
        .sum();
    #[allow(clippy::cast_precision_loss)] // panel counts are tiny
    let gaps = (aspects.len() - 1) as f32 * PANEL_GAP;
    panels + gaps + 2.0 * EDGE_PADDING
}

pub struct ViewModel<'a> {
    pub entries: &'a [PanelEntry],
    pub viewport: Size,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let mut row = Row::new().spacing(PANEL_GAP).align_y(Vertical::Center);
    for (index, entry) in model.entries.iter().enumerate() {
        row = row.push(panel_view(
            index,
            entry,
            panel_size(entry.aspect, model.viewport),
        ));
    }

    let padded = Container::new(row)
        .padding(Padding {
            top: 0.0,
            right: EDGE_PADDING,
            bottom: 0.0,
            left: EDGE_PADDING,
        })
        .height(Length::Fill)
        .align_y(Vertical::Center);

    let strip = Scrollable::new(padded)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .id(Id::new(STRIP_ID));

    Container::new(wheel_inert(strip))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::surface)
        .into()
}

fn panel_view<'a>(index: usize, entry: &'a PanelEntry, size: Size) -> Element<'a, Message> {
    let image = Image::new(entry.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(size.width)
        .height(size.height);

    let caption = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.panel.id.as_str()).size(typography::CAPTION))
            .push(Text::new(entry.panel.title.as_str()).size(typography::TITLE_SM))
            .push(Text::new(entry.panel.description.as_str()).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::panel_caption);

    let framed = Stack::new()
        .width(size.width)
        .height(size.height)
        .push(image)
        .push(
            Container::new(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );

    mouse_area(framed)
        .on_press(Message::PanelPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery strip and the lightbox overlay.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_900, WHITE},
    radius, shadow,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Flat surface behind the gallery strip.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the enlarged lightbox image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Caption band laid over the bottom of a gallery panel.
pub fn panel_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Style for the lightbox close control.
pub fn close_button() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

const _: () = {
    assert!(opacity::OVERLAY_STRONG < 1.0);
    assert!(opacity::OVERLAY_STRONG > 0.0);
    assert!(opacity::OVERLAY_HOVER > opacity::OVERLAY_MEDIUM);
};

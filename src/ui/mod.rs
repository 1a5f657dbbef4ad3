// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`gallery`] - The horizontal strip of captioned panels
//! - [`overlay`] - Lightbox state machine and its full-window layer
//! - [`scrub`] - Scroll-to-travel mapping for the strip
//! - [`widgets`] - The wheel-inert wrapper around the strip scrollable
//! - [`styles`] - Centralized container and button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod overlay;
pub mod scrub;
pub mod styles;
pub mod widgets;

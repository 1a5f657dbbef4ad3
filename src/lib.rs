// SPDX-License-Identifier: MPL-2.0
//! `iced_strip` is a scroll-scrubbed horizontal image gallery built with the
//! Iced GUI framework.
//!
//! Vertical wheel scroll maps linearly onto horizontal travel of a strip of
//! captioned panels; pressing a panel opens a lightbox overlay with the
//! enlarged image.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

// SPDX-License-Identifier: MPL-2.0
//! Application root state and the single update entrypoint.
//!
//! `App` owns the resolved catalog, the scrub driver state, and the lightbox,
//! and translates raw window events (wheel, resize, Escape) into their
//! effects. Policy decisions such as window limits, the driver tick rate,
//! and config clamping stay close to the update loop so user-facing behavior
//! is easy to audit.

use crate::catalog::{self, Catalog};
use crate::config;
use crate::ui::gallery;
use crate::ui::overlay::{self, Lightbox};
use crate::ui::scrub::{self, ScrubState};
use crate::ui::{design_tokens::typography, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Container, Id, Stack, Text};
use iced::{event, keyboard, mouse, time, window, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Driver tick period; close enough to one animation frame.
const DRIVER_TICK: Duration = Duration::from_millis(16);

const MIN_LINE_SCROLL_STEP: f32 = 10.0;
const MAX_LINE_SCROLL_STEP: f32 = 600.0;

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional gallery manifest to load instead of the embedded one.
    pub manifest: Option<PathBuf>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Window events the app cares about: resize, wheel, keyboard.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Driver tick; applies the current offset to the strip.
    Tick(std::time::Instant),
    /// A gallery panel was pressed; opens the lightbox on that record.
    PanelPressed(usize),
    /// Press landed on the enlarged image or its caption; keeps the
    /// lightbox open.
    LightboxImagePressed,
    /// Backdrop, close control, or Escape.
    DismissLightbox,
    /// The dismiss delay elapsed for the close with this generation.
    DismissSettled(u64),
}

/// Root application state.
pub struct App {
    catalog: Catalog,
    scrub: ScrubState,
    lightbox: Lightbox,
    line_scroll_step: f32,
    dismiss_delay: Duration,
    load_error: Option<String>,
}

/// Keeps persisted wheel steps inside a sane range.
fn clamp_line_step(value: f32) -> f32 {
    value.clamp(MIN_LINE_SCROLL_STEP, MAX_LINE_SCROLL_STEP)
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // The boot closure must be `Fn`, so it clones the flags on each call.
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let loaded = match &flags.manifest {
            Some(path) => catalog::load_from_path(path),
            None => catalog::load_embedded(),
        };
        let (catalog, load_error) = match loaded {
            Ok(catalog) => {
                tracing::info!(
                    panels = catalog.entries.len(),
                    title = %catalog.title,
                    "gallery catalog loaded"
                );
                (catalog, None)
            }
            Err(err) => {
                tracing::error!(%err, "failed to load gallery catalog");
                let message = format!("Failed to load gallery: {}", err);
                (
                    Catalog {
                        title: "Gallery".to_string(),
                        entries: Vec::new(),
                    },
                    Some(message),
                )
            }
        };

        let mut app = Self::with_catalog(catalog);
        app.load_error = load_error;
        app.line_scroll_step = clamp_line_step(
            config
                .line_scroll_step
                .unwrap_or(config::DEFAULT_LINE_SCROLL_STEP),
        );
        app.dismiss_delay = Duration::from_millis(
            config
                .dismiss_delay_ms
                .unwrap_or(config::DEFAULT_DISMISS_DELAY_MS),
        );

        (app, Task::none())
    }

    fn with_catalog(catalog: Catalog) -> Self {
        let mut app = Self {
            catalog,
            scrub: ScrubState::new(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            lightbox: Lightbox::default(),
            line_scroll_step: config::DEFAULT_LINE_SCROLL_STEP,
            dismiss_delay: overlay::DISMISS_DELAY,
            load_error: None,
        };
        app.refresh_strip_geometry();
        app
    }

    fn title(&self) -> String {
        self.catalog.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Recomputes the strip width and travel for the current viewport.
    /// Run at startup and after every resize.
    fn refresh_strip_geometry(&mut self) {
        let aspects: Vec<f32> = self.catalog.entries.iter().map(|e| e.aspect).collect();
        self.scrub
            .set_strip_width(gallery::strip_width(&aspects, self.scrub.viewport()));
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::Tick(_instant) => {
                if self.catalog.entries.is_empty() {
                    return Task::none();
                }
                operation::snap_to(
                    Id::new(gallery::STRIP_ID),
                    RelativeOffset {
                        x: self.scrub.progress(),
                        y: 0.0,
                    },
                )
            }
            Message::PanelPressed(index) => {
                self.lightbox.open(index);
                Task::none()
            }
            Message::LightboxImagePressed => Task::none(),
            Message::DismissLightbox => self.dismiss_lightbox(),
            Message::DismissSettled(generation) => {
                self.lightbox.finish_dismiss(generation);
                Task::none()
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.scrub.resize(size);
                self.refresh_strip_geometry();
                Task::none()
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                // Background scroll is locked while the lightbox is open.
                if !self.lightbox.is_open() {
                    self.scrub
                        .scroll_by(scrub::wheel_travel(delta, self.line_scroll_step));
                }
                Task::none()
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => self.dismiss_lightbox(),
            _ => Task::none(),
        }
    }

    fn dismiss_lightbox(&mut self) -> Task<Message> {
        match self.lightbox.close() {
            Some(generation) => {
                let delay = self.dismiss_delay;
                Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                    Message::DismissSettled(generation)
                })
            }
            // Already closed: nothing to schedule.
            None => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, window_id| match &event {
            event::Event::Window(window::Event::Resized(_))
            | event::Event::Mouse(mouse::Event::WheelScrolled { .. })
            | event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                Some(Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })
            }
            _ => None,
        });

        // The driver only runs while there is a strip to position, so tests
        // and the empty-catalog error surface never spin it.
        let driver = if self.catalog.entries.is_empty() {
            Subscription::none()
        } else {
            time::every(DRIVER_TICK).map(Message::Tick)
        };

        Subscription::batch([events, driver])
    }

    fn view(&self) -> Element<'_, Message> {
        if let Some(message) = &self.load_error {
            return Container::new(Text::new(message.as_str()).size(typography::TITLE_SM))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::surface)
                .into();
        }

        let strip = gallery::view(gallery::ViewModel {
            entries: &self.catalog.entries,
            viewport: self.scrub.viewport(),
        });

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(strip);

        if let Some(index) = self.lightbox.visible_panel() {
            if let Some(entry) = self.catalog.entries.get(index) {
                layers = layers.push(overlay::view(entry));
            }
        }

        layers.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn test_app() -> App {
        let catalog = catalog::load_embedded().expect("embedded catalog");
        let mut app = App::with_catalog(catalog);
        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
        });
        app
    }

    fn wheel(app: &mut App, lines: f32) {
        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: lines },
            }),
        });
    }

    #[test]
    fn boot_with_default_flags_loads_embedded_catalog() {
        let (app, _task) = App::new(Flags::default());
        assert!(app.load_error.is_none());
        assert_eq!(app.catalog.entries.len(), 6);
    }

    #[test]
    fn embedded_catalog_produces_positive_travel() {
        let app = test_app();
        assert!(app.scrub.total_travel() > 0.0);
    }

    #[test]
    fn wheel_scroll_moves_the_strip() {
        let mut app = test_app();
        wheel(&mut app, -2.0);
        assert!(app.scrub.offset() > 0.0);
    }

    #[test]
    fn panel_press_opens_lightbox_on_that_record() {
        let mut app = test_app();
        let _ = app.update(Message::PanelPressed(3));
        assert_eq!(app.lightbox.visible_panel(), Some(3));
    }

    #[test]
    fn wheel_is_ignored_while_lightbox_open() {
        let mut app = test_app();
        wheel(&mut app, -1.0);
        let before = app.scrub.offset();

        let _ = app.update(Message::PanelPressed(0));
        wheel(&mut app, -3.0);
        assert_abs_diff_eq!(app.scrub.offset(), before);

        // Closing restores background scroll.
        let _ = app.update(Message::DismissLightbox);
        wheel(&mut app, -1.0);
        assert!(app.scrub.offset() > before);
    }

    #[test]
    fn dismiss_closes_an_open_lightbox() {
        // Escape, the backdrop, and the close control all route here.
        let mut app = test_app();
        let _ = app.update(Message::PanelPressed(1));
        let _ = app.update(Message::DismissLightbox);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn dismiss_when_closed_has_no_effect() {
        let mut app = test_app();
        let _ = app.update(Message::DismissLightbox);
        assert!(!app.lightbox.is_open());
        assert_eq!(app.lightbox.retained_panel(), None);
    }

    #[test]
    fn rapid_reopen_survives_the_deferred_clear() {
        let mut app = test_app();
        let _ = app.update(Message::PanelPressed(2));
        let _ = app.update(Message::DismissLightbox);
        let _ = app.update(Message::PanelPressed(2));

        // The first close was generation 1; its deferred clear fires now.
        let _ = app.update(Message::DismissSettled(1));
        assert_eq!(app.lightbox.visible_panel(), Some(2));
    }

    #[test]
    fn resize_keeps_travel_non_negative() {
        let mut app = test_app();
        let _ = app.update(Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Window(window::Event::Resized(Size::new(50_000.0, 600.0))),
        });
        assert_abs_diff_eq!(app.scrub.total_travel(), 0.0);
        assert_abs_diff_eq!(app.scrub.offset(), 0.0);
    }

    #[test]
    fn clamp_line_step_bounds_persisted_values() {
        assert_abs_diff_eq!(clamp_line_step(0.5), MIN_LINE_SCROLL_STEP);
        assert_abs_diff_eq!(clamp_line_step(10_000.0), MAX_LINE_SCROLL_STEP);
        assert_abs_diff_eq!(clamp_line_step(120.0), 120.0);
    }
}

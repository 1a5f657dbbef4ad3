// SPDX-License-Identifier: MPL-2.0
use iced_strip::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        manifest: args
            .opt_value_from_str::<_, PathBuf>("--manifest")
            .unwrap_or(None),
    };

    app::run(flags)
}

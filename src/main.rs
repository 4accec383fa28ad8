// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

fn main() -> iced::Result {
    configure_logging();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        data_dir: opt_arg(&mut args, "--data-dir"),
        config_dir: opt_arg(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    app::run(flags)
}

/// Reads `--name <value>`; a missing value is reported and treated as absent.
fn opt_arg(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    args.opt_value_from_str(name).unwrap_or_else(|err| {
        tracing::warn!("Invalid {} argument: {}", name, err);
        None
    })
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

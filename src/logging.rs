//! Diagnostics on stderr.
//!
//! Stdout belongs to the game, so the subscriber never writes there.
//! Verbosity comes from `RUST_LOG`, defaulting to warnings only.

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "cointoss=warn";

/// Initialise the `tracing` subscriber. Safe to call more than once.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let ansi = std::io::stderr().is_terminal();
    let subscriber = build_subscriber(env_filter, std::io::stderr, ansi);
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// The formatting subscriber used by both binaries, writing to `writer`.
pub fn build_subscriber<W>(
    env_filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .finish()
}

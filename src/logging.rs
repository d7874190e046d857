//! Diagnostics go through `tracing` to stderr so they never mix with the answers on stdout.
//!
//! The filter is read from `RUST_LOG` and defaults to `warn`, e.g.
//! `RUST_LOG=aoc2022=debug day16 input.txt` prints the chosen valve schedule.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

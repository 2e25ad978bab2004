//! DXIL assembly viewer - command-line front end.
//!
//! Thin consumer of [`dxil_scan`]: every command scans its input into token
//! ranges and renders them (as a dump, as colored text, or as counts).
//!
//! ```text
//! file / stdin ──► read_source() ──► dxil_scan::ranges() ──► render
//! ```

pub mod commands;
mod error;
pub mod theme;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=dxilv=debug` or `RUST_LOG=dxil_scan=debug`.
/// Events go to stderr so they never mix with command output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

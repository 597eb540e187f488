// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// The report itself goes through report::OutputWriter (stdout + file).
// Everything else - sitemap problems, per-hop traces, skipped entries - is
// logged through the `log` facade and printed on stderr by env_logger, so
// it never ends up in the report file.
//
//   sitemap-guardian --log-level debug           # every hop
//   RUST_LOG=sitemap_guardian=trace sitemap-guardian
// =============================================================================

use log::{LevelFilter, SetLoggerError};

/// Initializes env_logger.
///
/// RUST_LOG is read first; `level` then overrides the default level for
/// this crate. The HTTP stack is kept quiet unless something goes wrong.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("hyper", LevelFilter::Warn);
    builder.filter_module("rustls", LevelFilter::Error);
    builder.filter_module("sitemap_guardian", level);
    builder.format_timestamp(None);
    builder.format_target(false);

    builder.try_init()
}

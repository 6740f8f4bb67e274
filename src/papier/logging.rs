//! Logging utilities.
//!
//! The library only talks to the `log` facade. Binaries call [`init_logging`] once,
//! early in `main`, to install `env_logger`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "warn", "papier=debug"). When
/// `RUST_LOG` is set it wins over `filter`, so users can raise verbosity ad hoc.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(env_filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&env_filter);
        } else if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        // Tests may install their own logger first.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

//! Global logger setup for binaries built on the engine.
//!
//! The library itself only uses the `log` facade; drivers opt into output by
//! calling [`init_logging`] early in `main`.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows `env_logger` syntax (e.g. `"info"`,
/// `"orrery_engine=debug"`). When unset, `RUST_LOG` wins, then the default
/// level.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the process-wide logger. Later calls are no-ops; `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("hashsim", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests or embedding binaries may already have installed a logger.
        let _ = builder.try_init();
    });
}

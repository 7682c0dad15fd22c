//! Console logging using env_logger
//!
//! `RUST_LOG` wins when set; otherwise the level from the config file
//! applies. Output goes to stderr so command output on stdout stays
//! machine readable.

use env_logger::{Builder, Env};

pub fn init(default_level: &str) {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"gamefw_core::events=trace,gamefw_engine=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Fallback level when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            default_level: log::LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are ignored.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then
/// `config.default_level`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        // try_init: a test harness or host may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

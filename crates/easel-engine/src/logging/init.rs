use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g. `"info"` or
/// `"easel_format=trace,easel_engine=debug"`. When it is `None` the standard
/// `RUST_LOG` variable applies, and failing that everything at `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Takes the filter from the environment variable `var`, if set and
    /// non-empty.
    pub fn from_env(var: &str) -> Self {
        let env_filter = std::env::var(var).ok().filter(|f| !f.trim().is_empty());
        Self { env_filter, ..Self::default() }
    }

    pub fn write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    fn resolved_filter(&self) -> Option<String> {
        self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger.
///
/// Only the first call has any effect. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.resolved_filter() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };
        builder.write_style(config.write_style).init();

        log::debug!("logging initialized");
    });
}

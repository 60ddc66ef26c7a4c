use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Installs the stderr subscriber. `filter` wins over `RUST_LOG`.
pub fn init(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

pub mod api;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod dedup;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod repositories;
pub mod search;

pub use config::{Config, LogFormat};

/// Installs the global tracing subscriber. `RUST_LOG` controls the filter.
pub fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,coursescout=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

//! Logging for the Android host
//!
//! On Android, `log` records go to logcat through `android_logger` and
//! `tracing` events through a `tracing-android` layer, both under the
//! configured tag. Elsewhere this falls back to the core fmt subscriber.

use perch_core::LoggingConfig;

/// Map a filter directive's default level to a `log` level filter
///
/// Only the bare level (e.g. `debug` in `debug,perch_core=trace`) is used;
/// logcat has no per-target filtering.
pub fn max_level(filter: &str) -> log::LevelFilter {
    filter
        .split(',')
        .map(str::trim)
        .find(|directive| !directive.contains('='))
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Initialize logging once per process
#[cfg(target_os = "android")]
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;

    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(max_level(&config.filter))
            .with_tag(config.tag.as_str()),
    );

    match tracing_android::layer(&config.tag) {
        Ok(layer) => {
            let subscriber = tracing_subscriber::registry().with(layer);
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        Err(e) => log::warn!("tracing-android layer unavailable: {}", e),
    }
}

/// Initialize logging once per process
#[cfg(not(target_os = "android"))]
pub fn init_logging(config: &LoggingConfig) {
    perch_core::logging::init_tracing(config);
}

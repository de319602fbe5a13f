//! Subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::LogFormat;

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Installation
/// failures are ignored so tests that initialize eagerly do not collide.
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => {
            let _ = builder
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .try_init();
        }
        LogFormat::Text => {
            let _ = builder.try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::LogFormat;

    #[test]
    fn format_defaults_to_json() {
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        super::init(LogFormat::Text);
        super::init(LogFormat::Text);
    }
}

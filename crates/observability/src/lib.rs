//! Tracing and logging setup shared by every binary.

pub mod tracing;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    #[default]
    Json,
    /// Human-readable lines, for local development.
    Text,
}

impl LogFormat {
    /// Reads `CREWDESK_LOG_FORMAT`; anything other than `text` means JSON.
    pub fn from_env() -> Self {
        match std::env::var("CREWDESK_LOG_FORMAT").as_deref() {
            Ok("text") => Self::Text,
            _ => Self::Json,
        }
    }
}

/// Initialize process-wide tracing with the format taken from the
/// environment. Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

//! Diagnostic logging setup
//!
//! Events go to stderr so they never mix with cipher output on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "JCIPHERS_LOG";

/// Pick the filter directive: env var first, then the CLI flag, then settings
pub fn resolve_filter(cli_level: Option<&str>, settings_level: &str) -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| cli_level.map(str::to_string))
        .unwrap_or_else(|| settings_level.to_string())
}

/// Install the global subscriber
///
/// An unparsable directive falls back to `warn`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_beats_settings() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        assert_eq!(resolve_filter(Some("debug"), "warn"), "debug");
        assert_eq!(resolve_filter(None, "info"), "info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("not a [valid filter");
        init("debug");
    }
}

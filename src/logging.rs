use crate::error_classifier::LogLevel;
use std::env;

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

/// Accepts plain levels as well as `module=level` directive lists; only the
/// first directive's level is honored.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let first_directive = rust_log.split(',').next().unwrap_or(rust_log);
    let level = first_directive
        .rsplit('=')
        .next()
        .unwrap_or(first_directive);

    match level.to_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Unparseable directives fall back to info.
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

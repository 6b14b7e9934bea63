use serde::{Deserialize, Serialize};

use super::entry::LogEntry;

/// Fixed level vocabulary. Anything else on the wire renders through the
/// `"N/A"` fallback instead of leaking arbitrary strings into badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Case-insensitive parse of the wire string.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Some(LogLevel::Error),
            "WARN" => Some(LogLevel::Warn),
            "INFO" => Some(LogLevel::Info),
            "DEBUG" => Some(LogLevel::Debug),
            "TRACE" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Abbreviated label used in the page-breakdown footer.
    pub fn short_label(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DBG",
            LogLevel::Trace => "TRC",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LogLevel::Error => "badge badge-error",
            LogLevel::Warn => "badge badge-warn",
            LogLevel::Info => "badge badge-info",
            LogLevel::Debug => "badge badge-debug",
            LogLevel::Trace => "badge badge-trace",
        }
    }
}

/// Display label for an optional wire level; unrecognized or missing values
/// map to the fixed fallback.
pub fn level_label(raw: Option<&str>) -> String {
    match raw.and_then(LogLevel::parse) {
        Some(level) => level.label().to_string(),
        None => "N/A".to_string(),
    }
}

/// Badge style for an optional wire level; the fallback shares the DEBUG
/// style.
pub fn level_badge_class(raw: Option<&str>) -> &'static str {
    match raw.and_then(LogLevel::parse) {
        Some(level) => level.badge_class(),
        None => LogLevel::Debug.badge_class(),
    }
}

/// Per-level counts over one loaded page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub error: usize,
    pub warn: usize,
    pub info: usize,
    pub debug: usize,
    pub trace: usize,
}

impl LevelCounts {
    pub fn get(&self, level: LogLevel) -> usize {
        match level {
            LogLevel::Error => self.error,
            LogLevel::Warn => self.warn,
            LogLevel::Info => self.info,
            LogLevel::Debug => self.debug,
            LogLevel::Trace => self.trace,
        }
    }
}

/// Count recognized levels on the given page only; rows with unknown or
/// missing levels contribute nowhere.
pub fn count_levels(entries: &[LogEntry]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for entry in entries {
        match entry.level.as_deref().and_then(LogLevel::parse) {
            Some(LogLevel::Error) => counts.error += 1,
            Some(LogLevel::Warn) => counts.warn += 1,
            Some(LogLevel::Info) => counts.info += 1,
            Some(LogLevel::Debug) => counts.debug += 1,
            Some(LogLevel::Trace) => counts.trace += 1,
            None => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Option<&str>) -> LogEntry {
        LogEntry {
            id: 1,
            ts: None,
            level: level.map(str::to_string),
            section: None,
            summary: None,
            is_read: false,
            has_req_body: false,
            has_res_body: false,
            tf_req_id: None,
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("Trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("fatal"), None);
        assert_eq!(LogLevel::parse(""), None);
    }

    #[test]
    fn test_badge_table() {
        assert_eq!(level_label(Some("ERROR")), "ERROR");
        assert_eq!(level_badge_class(Some("ERROR")), "badge badge-error");
        assert_eq!(level_badge_class(Some("warn")), "badge badge-warn");
        assert_eq!(level_badge_class(Some("INFO")), "badge badge-info");
        assert_eq!(level_badge_class(Some("DEBUG")), "badge badge-debug");
        assert_eq!(level_badge_class(Some("TRACE")), "badge badge-trace");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        assert_eq!(level_label(Some("VERBOSE")), "N/A");
        assert_eq!(level_label(None), "N/A");
        assert_eq!(level_badge_class(Some("VERBOSE")), "badge badge-debug");
        assert_eq!(level_badge_class(None), "badge badge-debug");
    }

    #[test]
    fn test_count_levels_counts_recognized_only() {
        let page = vec![
            entry(Some("ERROR")),
            entry(Some("error")),
            entry(Some("INFO")),
            entry(Some("bogus")),
            entry(None),
        ];
        let counts = count_levels(&page);
        assert_eq!(counts.error, 2);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.warn, 0);
        assert_eq!(counts.debug, 0);
        assert_eq!(counts.trace, 0);
    }

    #[test]
    fn test_count_levels_empty_page() {
        assert_eq!(count_levels(&[]), LevelCounts::default());
    }
}

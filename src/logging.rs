use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct EventLine<'a> {
    ts: u64,
    level: LogLevel,
    event: &'a str,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

/// Builds one JSON log line. Non-object `fields` are ignored; fields named
/// like the envelope keys are dropped rather than overriding them.
pub fn format_event(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut extra = match fields {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    for reserved in ["ts", "level", "event"] {
        extra.remove(reserved);
    }

    let line = EventLine {
        ts,
        level,
        event,
        fields: extra,
    };
    serde_json::to_string(&line).unwrap_or_else(|_| format!("{{\"event\":\"{event}\"}}"))
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < min_level {
        return;
    }
    emit(level, &format_event(now_unix_seconds(), level, event, fields));
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    // std's clock is unavailable in the browser.
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn parse_accepts_known_levels_only() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn event_line_merges_fields() {
        let line = format_event(
            1_700_000_000,
            LogLevel::Info,
            "backdrop_changed",
            json!({ "backdrop": "grid", "mobile": false }),
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");

        assert_eq!(parsed["ts"], 1_700_000_000u64);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "backdrop_changed");
        assert_eq!(parsed["backdrop"], "grid");
        assert_eq!(parsed["mobile"], false);
    }

    #[test]
    fn envelope_keys_cannot_be_overridden() {
        let line = format_event(1, LogLevel::Warn, "canvas_unavailable", json!({ "event": "spoofed", "level": "debug" }));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["event"], "canvas_unavailable");
        assert_eq!(parsed["level"], "warn");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(1, LogLevel::Debug, "tick", json!(42));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }
}

//! Output formatting.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format
    Table,
    /// JSON format
    Json,
    /// Plain text format
    #[default]
    Plain,
}

/// Trait for plain text output.
pub trait PlainPrint {
    /// Print as plain text with formatting.
    fn plain_print(&self);
}

/// Trait for table row generation.
pub trait TableRow {
    /// Get table headers.
    fn headers() -> Vec<&'static str>;
    /// Get row data as strings.
    fn row(&self) -> Vec<String>;
}

/// Print items in plain text format.
pub fn print_plain<T: PlainPrint>(items: &[T]) {
    if items.is_empty() {
        println!("No results");
        return;
    }
    for item in items {
        item.plain_print();
    }
}

/// Format an ISO-8601 instant in local time. Unparseable input is shown as is.
pub fn format_time(instant: &str) -> String {
    if instant.is_empty() {
        return "-".to_string();
    }

    match DateTime::parse_from_rfc3339(instant) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => instant.to_string(),
    }
}

/// Format a duration in seconds as `1h 2m 3s`.
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "-".to_string();
    }
    match seconds {
        s if s < 60 => format!("{}s", s),
        s if s < 3600 => format!("{}m {}s", s / 60, s % 60),
        s => format!("{}h {}m {}s", s / 3600, (s % 3600) / 60, s % 60),
    }
}

/// Print a table of items with proper formatting for each output mode.
pub fn print_table<T: TableRow + Serialize + PlainPrint>(items: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(T::headers());
            for item in &items {
                table.add_row(item.row());
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            print_plain(&items);
        }
    }
}

/// Print an untyped payload such as performance or audio details.
pub fn print_value(value: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
        }
        OutputFormat::Table => {
            let pairs = flatten(value);
            if pairs.is_empty() {
                println!("No results");
                return;
            }
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Field", "Value"]);
            for (key, value) in pairs {
                table.add_row(vec![key, value]);
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            let pairs = flatten(value);
            if pairs.is_empty() {
                println!("No results");
            }
            for (key, value) in pairs {
                println!("{}: {}", key.cyan(), value);
            }
        }
    }
}

/// Flatten nested objects and arrays into dotted `key = value` pairs.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into("", value, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(&join(key), value, out);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_into(&join(&index.to_string()), value, out);
            }
        }
        Value::Null if prefix.is_empty() => {}
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Print a one-line confirmation.
pub fn print_done(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flatten_nested() {
        let value = json!({
            "type": "Hybrid",
            "pstnInfo": { "US": { "accessCode": "123" } },
            "times": [{ "startTime": "a" }]
        });

        assert_eq!(
            flatten(&value),
            vec![
                ("pstnInfo.US.accessCode".to_string(), "123".to_string()),
                ("times.0.startTime".to_string(), "a".to_string()),
                ("type".to_string(), "Hybrid".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_scalars() {
        assert_eq!(flatten(&Value::Null), vec![]);
        assert_eq!(flatten(&json!({ "n": 3, "b": true })).len(), 2);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "-");
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3725), "1h 2m 5s");
    }

    #[test]
    fn test_format_time_falls_back_to_input() {
        assert_eq!(format_time(""), "-");
        assert_eq!(format_time("soon"), "soon");
    }
}

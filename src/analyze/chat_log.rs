// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-process statistics for exported chat logs.
//!
//! Accepted shapes:
//! - a JSON array of message objects
//! - an object holding such an array under `messages`, `data` or `chat_history`
//! - an object of equal-length column arrays
//!
//! Column names are matched loosely (`time` / `content`, `message`, `text` / `send`, `author`,
//! `user`). Charts are not produced here.

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::{read_document, AnalysisProvider, AnalyzeError};
use crate::model::AnalysisResult;

const WRAPPER_KEYS: [&str; 3] = ["messages", "data", "chat_history"];
/// Numeric timestamps above this are milliseconds, otherwise seconds.
const MILLIS_CUTOFF: f64 = 10_000_000_000.0;

type Row<'a> = Cow<'a, Map<String, Value>>;

const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLogAnalyzer;

impl AnalysisProvider for ChatLogAnalyzer {
    fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzeError> {
        analyze_chat_log(&read_document(path)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Timestamp,
    Content,
    Sender,
}

fn classify_column(name: &str) -> Option<Column> {
    let lower = name.to_lowercase();
    if lower.contains("time") {
        Some(Column::Timestamp)
    } else if ["content", "message", "text"].iter().any(|needle| lower.contains(needle)) {
        Some(Column::Content)
    } else if ["send", "author", "user"].iter().any(|needle| lower.contains(needle)) {
        Some(Column::Sender)
    } else {
        None
    }
}

/// Computes message totals, the most active sender and the busiest calendar day.
pub fn analyze_chat_log(document: &Value) -> Result<AnalysisResult, AnalyzeError> {
    let rows = message_rows(document)?;
    if rows.is_empty() {
        return Err(AnalyzeError::NoMessages);
    }

    let columns = column_names(&rows);
    let find = |wanted: Column| {
        columns.iter().find(|name| classify_column(name) == Some(wanted)).map(String::as_str)
    };
    let (Some(timestamp_col), Some(sender_col)) = (find(Column::Timestamp), find(Column::Sender))
    else {
        return Err(AnalyzeError::MissingColumns { found: columns.clone() });
    };

    let days = message_days(&rows, timestamp_col)?;
    let senders = rows.iter().filter_map(|row| row.get(sender_col).and_then(cell_text));

    let result = AnalysisResult {
        total_messages: Some(rows.len() as u64),
        top_sender: most_frequent(senders),
        busiest_day: most_frequent(days.into_iter().flatten())
            .map(|day| day.format("%Y-%m-%d").to_string()),
        ..AnalysisResult::default()
    };
    tracing::info!(messages = rows.len(), timestamp_col, sender_col, "analyzed chat log");
    Ok(result)
}

fn message_rows(document: &Value) -> Result<Vec<Row<'_>>, AnalyzeError> {
    match document {
        Value::Array(items) => object_rows(items),
        Value::Object(map) => {
            for key in WRAPPER_KEYS {
                if let Some(Value::Array(items)) = map.get(key) {
                    if !items.is_empty() {
                        return object_rows(items);
                    }
                }
            }
            column_rows(map)
        }
        _ => Err(AnalyzeError::UnrecognizedShape),
    }
}

fn object_rows(items: &[Value]) -> Result<Vec<Row<'_>>, AnalyzeError> {
    items
        .iter()
        .map(|item| item.as_object().map(Cow::Borrowed).ok_or(AnalyzeError::UnrecognizedShape))
        .collect()
}

/// Transposes `{"col": [..], ..}` into row objects. Every value must be an array of one length.
fn column_rows(map: &Map<String, Value>) -> Result<Vec<Row<'static>>, AnalyzeError> {
    let mut len = None;
    for value in map.values() {
        let Value::Array(column) = value else {
            return Err(AnalyzeError::UnrecognizedShape);
        };
        if *len.get_or_insert(column.len()) != column.len() {
            return Err(AnalyzeError::UnrecognizedShape);
        }
    }

    let rows = (0..len.unwrap_or(0))
        .map(|idx| {
            let row = map
                .iter()
                .filter_map(|(name, column)| Some((name.clone(), column.get(idx)?.clone())))
                .collect::<Map<String, Value>>();
            Cow::Owned(row)
        })
        .collect();
    Ok(rows)
}

fn column_names(rows: &[Row<'_>]) -> Vec<String> {
    let mut names = Vec::<String>::new();
    for row in rows {
        for key in row.keys() {
            if !names.iter().any(|name| name == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Calendar day of every message; `None` for missing/null timestamps.
fn message_days(
    rows: &[Row<'_>],
    column: &str,
) -> Result<Vec<Option<NaiveDate>>, AnalyzeError> {
    let cells: Vec<Option<&Value>> =
        rows.iter().map(|row| row.get(column).filter(|value| !value.is_null())).collect();

    let all_numeric = cells.iter().flatten().all(|value| value.is_number());
    let millis = all_numeric
        && cells.iter().flatten().filter_map(|value| value.as_f64()).fold(0.0, f64::max)
            > MILLIS_CUTOFF;

    cells
        .into_iter()
        .enumerate()
        .map(|(row, cell)| {
            let Some(value) = cell else {
                return Ok(None);
            };
            parse_day(value, millis)
                .map(Some)
                .ok_or_else(|| AnalyzeError::Timestamp { row, value: cell_display(value) })
        })
        .collect()
}

fn cell_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn parse_day(value: &Value, millis: bool) -> Option<NaiveDate> {
    match value {
        Value::Number(number) => {
            let raw = number.as_f64()?;
            let ms = if millis { raw } else { raw * 1000.0 };
            if !ms.is_finite() {
                return None;
            }
            DateTime::<Utc>::from_timestamp_millis(ms as i64).map(|dt| dt.date_naive())
        }
        Value::String(text) => parse_day_str(text.trim()),
        _ => None,
    }
}

fn parse_day_str(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local().date());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Most frequent item; ties go to the item seen first.
fn most_frequent<T, I>(items: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = Vec::<(T, usize)>::new();
    let mut index = HashMap::<T, usize>::new();
    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (item, count) in counts {
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{analyze_chat_log, classify_column, most_frequent, Column};
    use crate::analyze::AnalyzeError;

    #[rstest]
    #[case("timestamp", Some(Column::Timestamp))]
    #[case("Time", Some(Column::Timestamp))]
    #[case("message_time", Some(Column::Timestamp))]
    #[case("Content", Some(Column::Content))]
    #[case("text", Some(Column::Content))]
    #[case("sender_name", Some(Column::Sender))]
    #[case("Author", Some(Column::Sender))]
    #[case("username", Some(Column::Sender))]
    #[case("id", None)]
    fn columns_are_classified_loosely(#[case] name: &str, #[case] expected: Option<Column>) {
        assert_eq!(classify_column(name), expected);
    }

    #[test]
    fn list_of_messages_with_second_timestamps() {
        let doc = json!([
            {"timestamp": 1_704_067_200, "sender": "Bob", "content": "a"},
            {"timestamp": 1_704_153_600, "sender": "Alice", "content": "b"},
            {"timestamp": 1_704_153_700, "sender": "Alice", "content": "c"},
        ]);
        let result = analyze_chat_log(&doc).unwrap();
        assert_eq!(result.total_messages, Some(3));
        assert_eq!(result.top_sender.as_deref(), Some("Alice"));
        assert_eq!(result.busiest_day.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn wrapped_messages_with_millisecond_timestamps() {
        let doc = json!({
            "title": "export",
            "chat_history": [
                {"sentAt": 1_704_067_200_000_i64, "author": "Bob"},
                {"sentAt": 1_704_067_300_000_i64, "author": "Bob"},
            ]
        });
        // `sentAt` matches no rule, so there is no timestamp column.
        let err = analyze_chat_log(&doc).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingColumns { .. }));

        let doc = json!({
            "messages": [
                {"time_ms": 1_704_067_200_000_i64, "author": "Bob"},
                {"time_ms": 1_704_067_300_000_i64, "author": "Bob"},
            ]
        });
        let result = analyze_chat_log(&doc).unwrap();
        assert_eq!(result.total_messages, Some(2));
        assert_eq!(result.busiest_day.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn column_oriented_documents_are_transposed() {
        let doc = json!({
            "time": ["2024-03-01 10:00:00", "2024-03-01T11:00:00Z", "2024-03-02"],
            "user": ["Carol", "Dan", "Dan"],
        });
        let result = analyze_chat_log(&doc).unwrap();
        assert_eq!(result.total_messages, Some(3));
        assert_eq!(result.top_sender.as_deref(), Some("Dan"));
        assert_eq!(result.busiest_day.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let doc = json!({"time": [1, 2], "user": ["a"]});
        assert!(matches!(analyze_chat_log(&doc), Err(AnalyzeError::UnrecognizedShape)));
        assert!(matches!(analyze_chat_log(&json!("text")), Err(AnalyzeError::UnrecognizedShape)));
        assert!(matches!(analyze_chat_log(&json!([1, 2])), Err(AnalyzeError::UnrecognizedShape)));
    }

    #[test]
    fn empty_exports_have_no_messages() {
        assert!(matches!(analyze_chat_log(&json!([])), Err(AnalyzeError::NoMessages)));
        assert!(matches!(
            analyze_chat_log(&json!({"messages": []})),
            Err(AnalyzeError::NoMessages)
        ));
    }

    #[test]
    fn missing_sender_column_lists_found_columns() {
        let doc = json!([{"timestamp": 1, "body": "x"}]);
        match analyze_chat_log(&doc).unwrap_err() {
            AnalyzeError::MissingColumns { mut found } => {
                found.sort();
                assert_eq!(found, ["body", "timestamp"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_timestamp_reports_row() {
        let doc = json!([
            {"timestamp": "2024-01-01", "sender": "a"},
            {"timestamp": "yesterday", "sender": "b"},
        ]);
        match analyze_chat_log(&doc).unwrap_err() {
            AnalyzeError::Timestamp { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected Timestamp, got {other:?}"),
        }
    }

    #[test]
    fn null_cells_are_skipped_in_counts() {
        let doc = json!([
            {"timestamp": null, "sender": null},
            {"timestamp": "2024-05-05", "sender": "Eve"},
        ]);
        let result = analyze_chat_log(&doc).unwrap();
        assert_eq!(result.total_messages, Some(2));
        assert_eq!(result.top_sender.as_deref(), Some("Eve"));
        assert_eq!(result.busiest_day.as_deref(), Some("2024-05-05"));
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_seen() {
        assert_eq!(most_frequent(["b", "a", "a", "b"]), Some("b"));
        assert_eq!(most_frequent(["b", "a", "a"]), Some("a"));
        assert_eq!(most_frequent(Vec::<&str>::new()), None);
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Analysis providers.
//!
//! A provider turns a file on disk into an [`AnalysisResult`] or fails. Failures stay here: the
//! caller reports them and never hands anything to the deck.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::model::AnalysisResult;

pub mod chat_log;

pub use chat_log::{analyze_chat_log, ChatLogAnalyzer};

#[derive(Debug)]
pub enum AnalyzeError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    /// The document is neither a message list nor a column table.
    UnrecognizedShape,
    NoMessages,
    MissingColumns { found: Vec<String> },
    Timestamp { row: usize, value: String },
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::UnrecognizedShape => f.write_str("could not parse message list from JSON"),
            Self::NoMessages => f.write_str("no messages found"),
            Self::MissingColumns { found } => write!(
                f,
                "missing required columns (timestamp, sender); found: [{}]",
                found.join(", ")
            ),
            Self::Timestamp { row, value } => {
                write!(f, "error parsing timestamp {value:?} in message {row}")
            }
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Upstream collaborator that produces a result once per request.
pub trait AnalysisProvider: Send + Sync {
    fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzeError>;
}

fn read_document(path: &Path) -> Result<Value, AnalyzeError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| AnalyzeError::Io { path: path.to_owned(), source })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Reads a pre-computed result payload as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFile;

impl AnalysisProvider for ResultFile {
    fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzeError> {
        let document = read_document(path)?;
        Ok(serde_json::from_value(document)?)
    }
}

/// Treats the file as a result payload when it looks like one, else as a chat export.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoProvider;

impl AnalysisProvider for AutoProvider {
    fn analyze(&self, path: &Path) -> Result<AnalysisResult, AnalyzeError> {
        let document = read_document(path)?;
        if looks_like_result(&document) {
            tracing::debug!(path = %path.display(), "reading pre-computed result");
            return Ok(serde_json::from_value(document)?);
        }
        analyze_chat_log(&document)
    }
}

pub(crate) fn looks_like_result(document: &Value) -> bool {
    document
        .as_object()
        .map(|map| map.contains_key("total_messages") || map.contains_key("charts"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::{looks_like_result, AnalysisProvider, AnalyzeError, AutoProvider, ResultFile};

    static TEMP_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempFile {
        path: PathBuf,
    }

    impl TempFile {
        fn with_contents(contents: &str) -> Self {
            let counter = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
            let path =
                env::temp_dir().join(format!("recap-analyze-{}-{counter}.json", std::process::id()));
            std::fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    #[fixture]
    fn chat_export() -> TempFile {
        TempFile::with_contents(
            r#"[
  {"time": 1700000000, "author": "Alice", "text": "hi"},
  {"time": 1700000100, "author": "Bob", "text": "hello"},
  {"time": 1700000200, "author": "Alice", "text": "how are you"}
]"#,
        )
    }

    #[rstest]
    fn auto_provider_analyzes_chat_exports(chat_export: TempFile) {
        let result = AutoProvider.analyze(&chat_export.path).unwrap();
        assert_eq!(result.total_messages, Some(3));
        assert_eq!(result.top_sender.as_deref(), Some("Alice"));
        assert!(result.charts.is_empty());
    }

    #[test]
    fn auto_provider_passes_result_payloads_through() {
        let file = TempFile::with_contents(r#"{"total_messages": 7, "busiest_day": "2024-02-02"}"#);
        let result = AutoProvider.analyze(&file.path).unwrap();
        assert_eq!(result.total_messages, Some(7));
        assert_eq!(result.busiest_day.as_deref(), Some("2024-02-02"));
    }

    #[rstest]
    fn result_file_rejects_non_result_documents(chat_export: TempFile) {
        let err = ResultFile.analyze(&chat_export.path).unwrap_err();
        assert!(matches!(err, AnalyzeError::Json(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = env::temp_dir().join("recap-definitely-missing.json");
        let err = AutoProvider.analyze(&path).unwrap_err();
        assert!(matches!(err, AnalyzeError::Io { .. }));
        assert!(err.to_string().contains("recap-definitely-missing.json"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let file = TempFile::with_contents("{not json");
        let err = AutoProvider.analyze(&file.path).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn result_detection_needs_known_keys() {
        assert!(looks_like_result(&json!({"total_messages": 1})));
        assert!(looks_like_result(&json!({"charts": {}})));
        assert!(!looks_like_result(&json!({"messages": []})));
        assert!(!looks_like_result(&json!([])));
    }
}

//! Wire contract and aggregation for the file-import flow.
//!
//! `POST /import` answers either a structured `{imported, skipped}` object or
//! opaque text; the distinction is decided once, here, so downstream code only
//! ever sees the tagged [`ImportOutcome`].

use serde::{Deserialize, Serialize};

/// Structured 2xx payload of `POST /import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub imported: Option<u64>,
    #[serde(default)]
    pub skipped: Option<u64>,
}

/// Payload of `POST /import/demo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDemoResponse {
    pub ok: bool,
    pub inserted: u64,
}

/// Outcome of importing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Success { imported: u64, skipped: u64 },
    Failure,
}

impl ImportOutcome {
    /// Decode a 2xx import body. A structured JSON object counts as success
    /// (missing counters default to zero); plain text or malformed JSON is a
    /// generic failure signal for aggregation, not an error to propagate.
    pub fn from_response_text(text: &str) -> Self {
        match serde_json::from_str::<ImportResponse>(text) {
            Ok(response) => ImportOutcome::Success {
                imported: response.imported.unwrap_or(0),
                skipped: response.skipped.unwrap_or(0),
            },
            Err(_) => ImportOutcome::Failure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Ok,
    Fail,
}

/// Aggregate of one import batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportBatchSummary {
    /// Sum over successful files only
    pub imported: u64,
    /// Sum over successful files only
    pub skipped: u64,
    pub failed: usize,
    pub total: usize,
    pub status: ImportStatus,
}

/// Fold per-file outcomes into batch totals. The batch fails only when every
/// file of a non-empty batch failed.
pub fn summarize(outcomes: &[ImportOutcome]) -> ImportBatchSummary {
    let mut imported = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            ImportOutcome::Success {
                imported: file_imported,
                skipped: file_skipped,
            } => {
                imported += file_imported;
                skipped += file_skipped;
            }
            ImportOutcome::Failure => failed += 1,
        }
    }
    let total = outcomes.len();
    let status = if total > 0 && failed == total {
        ImportStatus::Fail
    } else {
        ImportStatus::Ok
    };
    ImportBatchSummary {
        imported,
        skipped,
        failed,
        total,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_structured_response() {
        assert_eq!(
            ImportOutcome::from_response_text(r#"{"imported": 12, "skipped": 3}"#),
            ImportOutcome::Success {
                imported: 12,
                skipped: 3
            }
        );
    }

    #[test]
    fn test_decode_partial_response_defaults_to_zero() {
        assert_eq!(
            ImportOutcome::from_response_text(r#"{"imported": 5}"#),
            ImportOutcome::Success {
                imported: 5,
                skipped: 0
            }
        );
        assert_eq!(
            ImportOutcome::from_response_text("{}"),
            ImportOutcome::Success {
                imported: 0,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_decode_opaque_text_is_failure() {
        assert_eq!(
            ImportOutcome::from_response_text("file accepted"),
            ImportOutcome::Failure
        );
        assert_eq!(
            ImportOutcome::from_response_text(r#"{"imported": "#),
            ImportOutcome::Failure
        );
    }

    #[test]
    fn test_summarize_mixed_batch_is_ok() {
        let outcomes = [
            ImportOutcome::Success {
                imported: 10,
                skipped: 2,
            },
            ImportOutcome::Failure,
            ImportOutcome::Success {
                imported: 1,
                skipped: 0,
            },
        ];
        let summary = summarize(&outcomes);
        assert_eq!(summary.status, ImportStatus::Ok);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 3);
        // Totals exclude the failed file's contribution.
        assert_eq!(summary.imported, 11);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_summarize_all_failed_is_fail() {
        let outcomes = [ImportOutcome::Failure, ImportOutcome::Failure];
        let summary = summarize(&outcomes);
        assert_eq!(summary.status, ImportStatus::Fail);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.imported, 0);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_summarize_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary.status, ImportStatus::Ok);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 0);
    }
}

use serde::{Deserialize, Serialize};

/// One log row as returned by `GET /logs`.
///
/// Bodies are intentionally absent here; `has_req_body`/`has_res_body` only
/// announce that a lazy fetch against `/logs/{id}/body` will find something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,

    /// ISO-8601 timestamp, when the source line carried one
    #[serde(default)]
    pub ts: Option<String>,

    /// Raw level string from the wire; display goes through [`LogLevel`]
    #[serde(default)]
    pub level: Option<String>,

    /// Free-form category (core/provider/plan/apply/...)
    #[serde(default)]
    pub section: Option<String>,

    /// Short text, possibly a serialized JSON object
    #[serde(default)]
    pub summary: Option<String>,

    /// The only client-mutable field, toggled optimistically
    #[serde(default)]
    pub is_read: bool,

    #[serde(default)]
    pub has_req_body: bool,

    #[serde(default)]
    pub has_res_body: bool,

    /// Correlation id grouping rows of one request, if available
    #[serde(default)]
    pub tf_req_id: Option<String>,
}

impl LogEntry {
    pub fn has_any_body(&self) -> bool {
        self.has_req_body || self.has_res_body
    }
}

/// Flip the read flag of the one entry matching `id`, leaving every other
/// entry untouched. Applied optimistically, before any server confirmation.
pub fn apply_read_flag(entries: &mut [LogEntry], id: i64, is_read: bool) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        entry.is_read = is_read;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, is_read: bool) -> LogEntry {
        LogEntry {
            id,
            ts: None,
            level: None,
            section: None,
            summary: None,
            is_read,
            has_req_body: false,
            has_res_body: false,
            tf_req_id: None,
        }
    }

    #[test]
    fn test_apply_read_flag_touches_only_the_matching_entry() {
        let mut page = vec![entry(1, false), entry(2, false), entry(3, true)];
        apply_read_flag(&mut page, 2, true);
        assert!(!page[0].is_read);
        assert!(page[1].is_read);
        assert!(page[2].is_read);

        apply_read_flag(&mut page, 3, false);
        assert!(!page[2].is_read);
    }

    #[test]
    fn test_apply_read_flag_ignores_unknown_id() {
        let mut page = vec![entry(1, false)];
        apply_read_flag(&mut page, 99, true);
        assert!(!page[0].is_read);
    }
}

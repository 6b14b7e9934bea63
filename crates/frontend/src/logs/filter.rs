/// The user's current search criteria, held as one plain value.
///
/// An empty string or `false` means "no constraint", never a literal match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Full-text query over summary/raw JSON
    pub q: String,
    /// One of the fixed level labels, or empty
    pub level: String,
    /// Free-form category (core/provider/plan/apply/...)
    pub section: String,
    /// Inclusive lower date bound (YYYY-MM-DD)
    pub from: String,
    /// Inclusive upper date bound (YYYY-MM-DD)
    pub to: String,
    pub has_req: bool,
    pub has_res: bool,
    pub unread_only: bool,
}

impl FilterCriteria {
    /// Query parameters for `GET /logs`, constrained fields only.
    ///
    /// All eight criteria are evaluated server-side so a page holds up to
    /// `limit` matching rows and pagination composes with the boolean flags.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        for (key, value) in [
            ("q", &self.q),
            ("level", &self.level),
            ("section", &self.section),
            ("from", &self.from),
            ("to", &self.to),
        ] {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                pairs.push((key, trimmed.to_string()));
            }
        }
        for (key, flag) in [
            ("has_req_body", self.has_req),
            ("has_res_body", self.has_res),
            ("unread_only", self.unread_only),
        ] {
            if flag {
                pairs.push((key, "true".to_string()));
            }
        }
        pairs
    }

    /// Number of active constraints, shown next to the filter controls.
    pub fn active_count(&self) -> usize {
        self.query_pairs().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_produce_no_parameters() {
        assert!(FilterCriteria::default().query_pairs().is_empty());
        assert_eq!(FilterCriteria::default().active_count(), 0);
    }

    #[test]
    fn test_each_text_field_contributes_its_parameter() {
        let criteria = FilterCriteria {
            q: "timeout".to_string(),
            level: "ERROR".to_string(),
            section: "apply".to_string(),
            from: "2024-01-01".to_string(),
            to: "2024-01-31".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("q", "timeout".to_string()),
                ("level", "ERROR".to_string()),
                ("section", "apply".to_string()),
                ("from", "2024-01-01".to_string()),
                ("to", "2024-01-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_boolean_flags_appear_only_when_set() {
        let criteria = FilterCriteria {
            has_req: true,
            unread_only: true,
            ..FilterCriteria::default()
        };
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("has_req_body", "true".to_string()),
                ("unread_only", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_text_is_no_constraint() {
        let criteria = FilterCriteria {
            q: "   ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.query_pairs().is_empty());
    }
}

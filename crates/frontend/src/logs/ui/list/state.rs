use leptos::prelude::*;

/// Rows fetched per page. "Next" is unbounded because the total count is
/// never known to the client.
pub const PAGE_SIZE: usize = 50;

/// Load state of the list. A loaded-but-empty page is a distinct, explicitly
/// rendered case, not a flavor of loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
}

/// List state owned by the page and passed down, never held globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogListState {
    pub phase: ListPhase,
    pub offset: usize,
    pub limit: usize,
}

impl Default for LogListState {
    fn default() -> Self {
        Self {
            phase: ListPhase::Idle,
            offset: 0,
            limit: PAGE_SIZE,
        }
    }
}

impl LogListState {
    /// Offset after "Next".
    pub fn next_offset(&self) -> usize {
        self.offset + self.limit
    }

    /// Offset after "Prev", floored at zero.
    pub fn prev_offset(&self) -> usize {
        self.offset.saturating_sub(self.limit)
    }

    /// "Prev" is disabled exactly on the first page.
    pub fn at_first_page(&self) -> bool {
        self.offset == 0
    }
}

pub fn create_state() -> RwSignal<LogListState> {
    RwSignal::new(LogListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_never_goes_negative() {
        let mut state = LogListState::default();
        assert_eq!(state.prev_offset(), 0);
        state.offset = 20;
        assert_eq!(state.prev_offset(), 0);
        state.offset = 120;
        assert_eq!(state.prev_offset(), 70);
    }

    #[test]
    fn test_next_advances_by_limit() {
        let mut state = LogListState::default();
        assert_eq!(state.next_offset(), PAGE_SIZE);
        state.offset = PAGE_SIZE;
        assert_eq!(state.next_offset(), 2 * PAGE_SIZE);
    }

    #[test]
    fn test_prev_disabled_exactly_at_zero() {
        let mut state = LogListState::default();
        assert!(state.at_first_page());
        state.offset = 1;
        assert!(!state.at_first_page());
    }
}

//! Two-slot focus classification history.

use crate::category::ContentCategory;

/// Shift register over the last two classifications.
///
/// `previous` always holds the category as of the examination before the
/// current one, which is exactly what paste plausibility needs: what was
/// focused when the clipboard was last populated. Owned by the engine
/// instance, not process-global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusHistory {
    current: ContentCategory,
    previous: ContentCategory,
}

impl FocusHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh classification. The only mutation point.
    pub fn record(&mut self, category: ContentCategory) {
        self.previous = self.current;
        self.current = category;
    }

    pub fn current(&self) -> ContentCategory {
        self.current
    }

    pub fn previous(&self) -> ContentCategory {
        self.previous
    }

    /// Clear both slots, as on plugin reload.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let history = FocusHistory::new();
        assert_eq!(history.current(), ContentCategory::None);
        assert_eq!(history.previous(), ContentCategory::None);
    }

    #[test]
    fn test_record_shifts_current_to_previous() {
        let mut history = FocusHistory::new();
        history.record(ContentCategory::PlainText);
        assert_eq!(history.current(), ContentCategory::PlainText);
        assert_eq!(history.previous(), ContentCategory::None);

        history.record(ContentCategory::File);
        assert_eq!(history.current(), ContentCategory::File);
        assert_eq!(history.previous(), ContentCategory::PlainText);
    }

    #[test]
    fn test_recording_same_category_twice_converges() {
        let mut history = FocusHistory::new();
        history.record(ContentCategory::PlainText);
        history.record(ContentCategory::PlainText);
        assert_eq!(history.previous(), history.current());
    }

    #[test]
    fn test_reset() {
        let mut history = FocusHistory::new();
        history.record(ContentCategory::File);
        history.record(ContentCategory::ListItem);
        history.reset();
        assert_eq!(history.current(), ContentCategory::None);
        assert_eq!(history.previous(), ContentCategory::None);
    }
}

//! Bounded navigation history over calendar periods
//!
//! A convenience layer owned by the caller; the period engine itself stays
//! stateless. Most recent entry first, capped at 10.

use std::collections::VecDeque;

use super::model::CalendarPeriod;

/// Maximum number of remembered periods
pub const HISTORY_CAP: usize = 10;

/// Most-recent-first record of visited periods
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: VecDeque<CalendarPeriod>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    /// Record a visited period, evicting the oldest entry past the cap
    pub fn record(&mut self, period: CalendarPeriod) {
        self.entries.push_front(period);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Most recently recorded period
    pub fn latest(&self) -> Option<&CalendarPeriod> {
        self.entries.front()
    }

    /// Entries from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &CalendarPeriod> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut history = NavigationHistory::new();
        history.record(CalendarPeriod::month(2025, 1).unwrap());
        history.record(CalendarPeriod::month(2025, 2).unwrap());

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.latest(),
            Some(&CalendarPeriod::month(2025, 2).unwrap())
        );
    }

    #[test]
    fn test_capped_at_ten_entries() {
        let mut history = NavigationHistory::new();
        let mut period = CalendarPeriod::month(2024, 1).unwrap();
        for _ in 0..15 {
            history.record(period);
            period = period.next();
        }

        assert_eq!(history.len(), HISTORY_CAP);
        // Oldest five evicted: the back of the deque is month 6 of the run
        assert_eq!(
            history.iter().last(),
            Some(&CalendarPeriod::month(2024, 6).unwrap())
        );
        assert_eq!(
            history.latest(),
            Some(&CalendarPeriod::month(2025, 3).unwrap())
        );
    }

    #[test]
    fn test_empty_history() {
        let history = NavigationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}

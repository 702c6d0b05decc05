//! Derived dashboard aggregates.

use crate::model::family::Family;
use serde::{Deserialize, Serialize};

/// Store-wide counts with the derived completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub family_count: u64,
    pub member_count: u64,
    pub duty_count: u64,
    pub pending_duty_count: u64,
    /// Percentage of non-pending duties; `None` when there are no duties.
    pub completion_rate: Option<u32>,
}

impl DashboardStats {
    pub fn from_counts(
        family_count: u64,
        member_count: u64,
        duty_count: u64,
        pending_duty_count: u64,
    ) -> Self {
        Self {
            family_count,
            member_count,
            duty_count,
            pending_duty_count,
            completion_rate: completion_rate(duty_count, pending_duty_count),
        }
    }
}

/// `round(100 * (total - pending) / total)`, or `None` for zero duties.
pub fn completion_rate(duty_count: u64, pending_duty_count: u64) -> Option<u32> {
    if duty_count == 0 {
        return None;
    }
    let settled = duty_count.saturating_sub(pending_duty_count) as f64;
    Some((100.0 * settled / duty_count as f64).round() as u32)
}

/// One family with its member count, as listed on the families table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySummary {
    pub family: Family,
    pub member_count: u64,
}

#[cfg(test)]
mod tests {
    use super::{completion_rate, DashboardStats};

    #[test]
    fn zero_duties_has_no_rate() {
        assert_eq!(completion_rate(0, 0), None);
        assert_eq!(DashboardStats::from_counts(2, 3, 0, 0).completion_rate, None);
    }

    #[test]
    fn rate_rounds_to_nearest_percent() {
        assert_eq!(completion_rate(1, 1), Some(0));
        assert_eq!(completion_rate(3, 1), Some(67));
        assert_eq!(completion_rate(8, 0), Some(100));
    }
}

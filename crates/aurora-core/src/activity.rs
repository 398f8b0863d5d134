use serde::{Deserialize, Serialize};

use crate::constants::{ACTIVE_MAX_DAYS, DORMANT_MAX_DAYS, MS_PER_DAY, RECENT_MAX_DAYS};

/// Coarse recency bucket derived from a "last touched" timestamp. Reused by
/// both the focus-area visualization and the resurfacing selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTier {
    /// Touched within the last 24 hours.
    Active,
    /// Touched this week.
    Recent,
    /// Touched this month.
    Dormant,
    /// Older than a month, or never recorded.
    Forgotten,
}

impl ActivityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTier::Active => "active",
            ActivityTier::Recent => "recent",
            ActivityTier::Dormant => "dormant",
            ActivityTier::Forgotten => "forgotten",
        }
    }
}

/// Map a last-activity timestamp to its tier. Upper bounds are inclusive:
/// exactly 1.0 days is still `Active`, exactly 7.0 days still `Recent`.
pub fn activity_tier(last_activity_ms: Option<i64>, now_ms: i64) -> ActivityTier {
    let Some(last) = last_activity_ms else {
        return ActivityTier::Forgotten;
    };

    let days_since = now_ms.saturating_sub(last) as f64 / MS_PER_DAY as f64;

    if days_since <= ACTIVE_MAX_DAYS {
        ActivityTier::Active
    } else if days_since <= RECENT_MAX_DAYS {
        ActivityTier::Recent
    } else if days_since <= DORMANT_MAX_DAYS {
        ActivityTier::Dormant
    } else {
        ActivityTier::Forgotten
    }
}

/// Days elapsed between a timestamp and now, as a fraction.
pub fn days_since(last_ms: i64, now_ms: i64) -> f64 {
    now_ms.saturating_sub(last_ms) as f64 / MS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;
    const NOW: i64 = 1_756_400_000_000;

    #[test]
    fn missing_timestamp_is_forgotten() {
        assert_eq!(activity_tier(None, NOW), ActivityTier::Forgotten);
    }

    #[test]
    fn exactly_24h_is_active() {
        assert_eq!(
            activity_tier(Some(NOW - 24 * HOUR), NOW),
            ActivityTier::Active
        );
    }

    #[test]
    fn just_past_24h_is_recent() {
        assert_eq!(
            activity_tier(Some(NOW - 24 * HOUR - 1), NOW),
            ActivityTier::Recent
        );
    }

    #[test]
    fn twenty_five_hours_is_recent() {
        assert_eq!(
            activity_tier(Some(NOW - 25 * HOUR), NOW),
            ActivityTier::Recent
        );
    }

    #[test]
    fn exactly_seven_days_is_recent() {
        assert_eq!(
            activity_tier(Some(NOW - 7 * 24 * HOUR), NOW),
            ActivityTier::Recent
        );
    }

    #[test]
    fn exactly_thirty_days_is_dormant() {
        assert_eq!(
            activity_tier(Some(NOW - 30 * 24 * HOUR), NOW),
            ActivityTier::Dormant
        );
    }

    #[test]
    fn beyond_thirty_days_is_forgotten() {
        assert_eq!(
            activity_tier(Some(NOW - 30 * 24 * HOUR - 1), NOW),
            ActivityTier::Forgotten
        );
    }

    #[test]
    fn just_now_is_active() {
        assert_eq!(activity_tier(Some(NOW), NOW), ActivityTier::Active);
    }
}

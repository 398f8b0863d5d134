use serde::{Deserialize, Serialize};

/// How much interface the user can comfortably take in right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiComplexity {
    Simple,
    Normal,
    Detailed,
}

impl UiComplexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiComplexity::Simple => "simple",
            UiComplexity::Normal => "normal",
            UiComplexity::Detailed => "detailed",
        }
    }
}

/// Time-of-day hint for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeContext {
    pub complexity: UiComplexity,
    pub is_busy_time: bool,
    pub label: &'static str,
}

/// Map an hour of day to its UI-complexity band. Total over 0–23; hours
/// beyond the documented domain are taken mod 24.
///
/// Mornings and lunch stay simple (gentle start), peak focus blocks are
/// busy, evenings can handle detail, late night drops back to simple.
pub fn time_context(hour: u8) -> TimeContext {
    match hour % 24 {
        6..=8 => TimeContext {
            complexity: UiComplexity::Simple,
            is_busy_time: false,
            label: "morning",
        },
        9..=11 => TimeContext {
            complexity: UiComplexity::Normal,
            is_busy_time: true,
            label: "peak-morning",
        },
        12..=13 => TimeContext {
            complexity: UiComplexity::Simple,
            is_busy_time: false,
            label: "lunch",
        },
        14..=16 => TimeContext {
            complexity: UiComplexity::Normal,
            is_busy_time: true,
            label: "peak-afternoon",
        },
        17..=20 => TimeContext {
            complexity: UiComplexity::Detailed,
            is_busy_time: false,
            label: "evening",
        },
        // 21-23 and 0-5: reduced cognitive load.
        _ => TimeContext {
            complexity: UiComplexity::Simple,
            is_busy_time: false,
            label: "night",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(time_context(6).label, "morning");
        assert_eq!(time_context(8).label, "morning");
        assert_eq!(time_context(9).label, "peak-morning");
        assert_eq!(time_context(12).label, "lunch");
        assert_eq!(time_context(14).label, "peak-afternoon");
        assert_eq!(time_context(17).label, "evening");
        assert_eq!(time_context(20).label, "evening");
        assert_eq!(time_context(21).label, "night");
    }

    #[test]
    fn night_band_wraps() {
        for h in [21, 22, 23, 0, 1, 2, 3, 4, 5] {
            let ctx = time_context(h);
            assert_eq!(ctx.label, "night", "hour {h}");
            assert_eq!(ctx.complexity, UiComplexity::Simple);
            assert!(!ctx.is_busy_time);
        }
    }

    #[test]
    fn busy_only_during_peak_blocks() {
        for h in 0..24u8 {
            let busy = matches!(h, 9..=11 | 14..=16);
            assert_eq!(time_context(h).is_busy_time, busy, "hour {h}");
        }
    }

    #[test]
    fn hours_beyond_domain_wrap() {
        assert_eq!(time_context(24).label, time_context(0).label);
        assert_eq!(time_context(33).label, time_context(9).label);
    }
}

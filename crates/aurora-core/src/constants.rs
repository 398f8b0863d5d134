/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Activity tier brackets, in days since last activity (inclusive upper
/// bounds). Beyond the dormant bound a file is forgotten.
pub const ACTIVE_MAX_DAYS: f64 = 1.0;
pub const RECENT_MAX_DAYS: f64 = 7.0;
pub const DORMANT_MAX_DAYS: f64 = 30.0;

/// Forgotten-lane age window: files untouched for years are assumed
/// abandoned rather than rediscoverable, so the lane is narrower than the
/// forgotten tier itself.
pub const FORGOTTEN_LANE_MIN_DAYS: f64 = 14.0;
pub const FORGOTTEN_LANE_MAX_DAYS: f64 = 60.0;

/// Midpoint of the forgotten-lane window. Preferring last-touch dates near
/// it keeps the lane from always surfacing the single oldest file.
pub const FORGOTTEN_LANE_MIDPOINT_DAYS: f64 =
    (FORGOTTEN_LANE_MIN_DAYS + FORGOTTEN_LANE_MAX_DAYS) / 2.0;

/// Seasonal echo half-window: last touch within this many days of the same
/// calendar date one year ago.
pub const SEASONAL_HALF_WINDOW_DAYS: i64 = 7;

/// Confidence for a keyword match in the file name. Filename relevance is a
/// stronger signal than directory context.
pub const NAME_MATCH_CONFIDENCE: f64 = 0.75;

/// Confidence for a keyword match found only in the path.
pub const PATH_MATCH_CONFIDENCE: f64 = 0.5;

/// Bonus per additional distinct keyword hit beyond the first.
pub const EXTRA_HIT_BONUS: f64 = 0.05;

/// Ceiling for any suggestion; keyword evidence alone never reaches 1.0.
pub const CONFIDENCE_CAP: f64 = 0.95;

//! Lightweight UTC calendar utilities (no chrono dependency).
//!
//! Uses Howard Hinnant's civil_from_days / days_from_civil algorithms for
//! Unix-to-date conversion. The seasonal-echo lane needs real calendar
//! arithmetic ("this same date one year ago"), not a flat 365-day offset.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::MS_PER_DAY;

/// Current UTC time as Unix milliseconds, for callers that need a clock
/// reading to pass into the core. The core itself never reads the clock.
pub fn now_unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Unix milliseconds → whole days since the epoch (floor).
pub fn epoch_day(ms: i64) -> i64 {
    ms.div_euclid(MS_PER_DAY)
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
pub fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// The inverse: (year, month, day) → Unix epoch days.
pub fn days_from_civil(y: i64, m: u64, d: u64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe as i64 - 719468
}

fn is_leap_year(y: i64) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Epoch day of "this same calendar date one year ago". Feb 29 clamps to
/// Feb 28 when the previous year is not a leap year.
pub fn same_date_last_year(ms: i64) -> i64 {
    let (y, m, d) = civil_from_days(epoch_day(ms));
    let y = y - 1;
    let d = if m == 2 && d == 29 && !is_leap_year(y) {
        28
    } else {
        d
    };
    days_from_civil(y, m, d)
}

//! Resurfacing selector: picks up to three "remember this?" candidates from
//! a file collection, one per rationale lane.
//!
//! Lanes run in the fixed order Forgotten → SeasonalEcho → RandomDelight,
//! each over the full collection minus files already chosen, so a result
//! never repeats a path. Only the RandomDelight draw is nondeterministic,
//! and it is isolated behind the injectable `Rng` so tests can substitute a
//! seeded generator without touching the other lanes.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::activity::{ActivityTier, activity_tier, days_since};
use crate::calendar::{epoch_day, same_date_last_year};
use crate::constants::{
    FORGOTTEN_LANE_MAX_DAYS, FORGOTTEN_LANE_MIDPOINT_DAYS, FORGOTTEN_LANE_MIN_DAYS,
    SEASONAL_HALF_WINDOW_DAYS,
};
use crate::record::{FileRecord, Rationale, ResurfacingCandidate};

/// Select up to three resurfacing candidates. With a fixed `rng` state and
/// fixed `now_ms` the output is fully reproducible; only the RandomDelight
/// slot depends on the generator. Empty input yields an empty result.
pub fn select_resurfacing(
    files: &[FileRecord],
    now_ms: i64,
    rng: &mut impl Rng,
) -> Vec<ResurfacingCandidate> {
    let mut chosen_paths: HashSet<&str> = HashSet::new();
    let mut result = Vec::with_capacity(3);

    if let Some(i) = pick_forgotten(files, now_ms, &chosen_paths) {
        chosen_paths.insert(&files[i].path);
        result.push(ResurfacingCandidate {
            file: files[i].clone(),
            rationale: Rationale::Forgotten,
        });
    }

    if let Some(i) = pick_seasonal_echo(files, now_ms, &chosen_paths) {
        chosen_paths.insert(&files[i].path);
        result.push(ResurfacingCandidate {
            file: files[i].clone(),
            rationale: Rationale::SeasonalEcho,
        });
    }

    if let Some(i) = pick_random_delight(files, &chosen_paths, rng) {
        result.push(ResurfacingCandidate {
            file: files[i].clone(),
            rationale: Rationale::RandomDelight,
        });
    }

    result
}

/// Seeded convenience wrapper for reproducible selection.
pub fn select_resurfacing_seeded(
    files: &[FileRecord],
    now_ms: i64,
    seed: u64,
) -> Vec<ResurfacingCandidate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    select_resurfacing(files, now_ms, &mut rng)
}

/// Dormant-or-forgotten files last touched 14–60 days ago, preferring the
/// one closest to the window midpoint. Files untouched for years are
/// assumed abandoned rather than rediscoverable, hence the upper bound.
fn pick_forgotten(files: &[FileRecord], now_ms: i64, excluded: &HashSet<&str>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, file) in files.iter().enumerate() {
        if excluded.contains(file.path.as_str()) {
            continue;
        }
        let touched = file.last_touched_ms();
        let tier = activity_tier(Some(touched), now_ms);
        if !matches!(tier, ActivityTier::Dormant | ActivityTier::Forgotten) {
            continue;
        }
        let days = days_since(touched, now_ms);
        if !(FORGOTTEN_LANE_MIN_DAYS..=FORGOTTEN_LANE_MAX_DAYS).contains(&days) {
            continue;
        }

        let distance = (days - FORGOTTEN_LANE_MIDPOINT_DAYS).abs();
        // Strict comparison keeps the earliest file on ties.
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }

    best.map(|(i, _)| i)
}

/// Files last touched within ±7 days of this same calendar date one year
/// ago. An empty pool yields no candidate; the lane is never backfilled.
fn pick_seasonal_echo(
    files: &[FileRecord],
    now_ms: i64,
    excluded: &HashSet<&str>,
) -> Option<usize> {
    let target_day = same_date_last_year(now_ms);

    files.iter().position(|file| {
        !excluded.contains(file.path.as_str())
            && (epoch_day(file.last_touched_ms()) - target_day).abs() <= SEASONAL_HALF_WINDOW_DAYS
    })
}

/// Uniform draw over everything the earlier lanes left behind.
fn pick_random_delight(
    files: &[FileRecord],
    excluded: &HashSet<&str>,
    rng: &mut impl Rng,
) -> Option<usize> {
    let pool: Vec<usize> = (0..files.len())
        .filter(|&i| !excluded.contains(files[i].path.as_str()))
        .collect();
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

//! Core-value classifier: scores a file against each configured life area's
//! keyword pattern and returns the best-guess tag with a confidence score.
//!
//! Pure and deterministic — identical inputs always produce identical
//! output. The classifier never applies a display threshold; gating policy
//! belongs to the caller.

use std::collections::HashSet;

use regex::Regex;

use crate::constants::{
    CONFIDENCE_CAP, EXTRA_HIT_BONUS, NAME_MATCH_CONFIDENCE, PATH_MATCH_CONFIDENCE,
};
use crate::record::{FileRecord, LifeArea, TagSuggestion};
use crate::template::template;

/// Classify a file against the user's life areas, resolving keyword
/// patterns from the built-in template catalogue. Areas whose id has no
/// template (or whose template has no pattern) contribute no candidate.
pub fn classify(file: &FileRecord, life_areas: &[LifeArea]) -> Option<TagSuggestion> {
    classify_with(file, life_areas, |id| {
        template(id).and_then(|t| t.keywords.as_ref())
    })
}

/// Classify with a caller-supplied id → pattern mapping, for custom keyword
/// sets. Matching semantics are identical to [`classify`]: the pattern is
/// tested against the file name first, then the path, case-insensitively;
/// among matching areas the highest confidence wins and ties break to the
/// area supplied earlier.
pub fn classify_with<'a, F>(
    file: &FileRecord,
    life_areas: &[LifeArea],
    resolve: F,
) -> Option<TagSuggestion>
where
    F: Fn(&str) -> Option<&'a Regex>,
{
    let mut best: Option<TagSuggestion> = None;

    for area in life_areas {
        let Some(pattern) = resolve(&area.id) else {
            continue;
        };
        let Some(confidence) = match_confidence(pattern, &file.name, &file.path) else {
            continue;
        };

        // Strict comparison keeps the earliest area on ties.
        if best.as_ref().is_none_or(|b| confidence > b.confidence) {
            best = Some(TagSuggestion {
                life_area_id: area.id.clone(),
                confidence,
            });
        }
    }

    best
}

/// Confidence for one pattern against one file, or None if nothing matched.
///
/// A hit in the name scores above a hit found only in the path — filename
/// relevance is a stronger signal than directory context. Each additional
/// distinct keyword hit adds a small bonus; the total is capped below 1.0.
fn match_confidence(pattern: &Regex, name: &str, path: &str) -> Option<f64> {
    let name_hits = distinct_hits(pattern, name);
    let path_hits = distinct_hits(pattern, path);

    let total: HashSet<&String> = name_hits.union(&path_hits).collect();
    if total.is_empty() {
        return None;
    }

    let base = if name_hits.is_empty() {
        PATH_MATCH_CONFIDENCE
    } else {
        NAME_MATCH_CONFIDENCE
    };
    let bonus = EXTRA_HIT_BONUS * (total.len() - 1) as f64;

    Some((base + bonus).min(CONFIDENCE_CAP))
}

fn distinct_hits(pattern: &Regex, text: &str) -> HashSet<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

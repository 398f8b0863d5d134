use serde::{Deserialize, Serialize};

/// A scanned file, as delivered by the collaborator that owns file-system
/// access. The core never produces these itself; `path` is unique within a
/// collection and `modified_at_ms` is Unix-epoch milliseconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub path: String,
    pub extension: Option<String>,
    pub size_bytes: u64,
    pub modified_at_ms: i64,
    pub last_opened_at_ms: Option<i64>,
}

impl FileRecord {
    /// The most recent touch we know about: last open if recorded,
    /// otherwise last modification.
    pub fn last_touched_ms(&self) -> i64 {
        match self.last_opened_at_ms {
            Some(opened) => opened.max(self.modified_at_ms),
            None => self.modified_at_ms,
        }
    }
}

/// A user-configured life area ("core value"). `id` lines up with a
/// template id for classification to apply; an area with no matching
/// template contributes no classification signal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeArea {
    pub id: String,
    pub name: String,
    pub icon_id: String,
    pub color_pair: Option<(String, String)>,
    pub last_activity_ms: Option<i64>,
}

impl LifeArea {
    pub fn new(id: &str, name: &str, icon_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon_id: icon_id.to_string(),
            color_pair: None,
            last_activity_ms: None,
        }
    }
}

/// Best-guess life-area tag for a file. Derived per call, never stored by
/// the core; gating by a display threshold is the caller's policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSuggestion {
    pub life_area_id: String,
    /// Match strength in [0, 1]. Not a calibrated probability.
    pub confidence: f64,
}

/// Why a file was resurfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rationale {
    /// Untouched long enough to have fallen off the radar, but not so long
    /// it reads as abandoned.
    Forgotten,
    /// Last touched around this same calendar date one year ago.
    SeasonalEcho,
    /// Pure serendipity.
    RandomDelight,
}

impl Rationale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rationale::Forgotten => "forgotten",
            Rationale::SeasonalEcho => "seasonal-echo",
            Rationale::RandomDelight => "random-delight",
        }
    }
}

/// One entry of a resurfacing result set. A set holds at most one candidate
/// per rationale and no duplicate paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResurfacingCandidate {
    pub file: FileRecord,
    pub rationale: Rationale,
}

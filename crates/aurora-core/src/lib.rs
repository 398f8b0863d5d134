//! Aurora inference core.
//!
//! Two entry points: the core-value classifier ([`classify`]), which scores
//! a file against the user's life areas and returns a confidence-scored tag
//! suggestion, and the resurfacing selector ([`select_resurfacing`]), which
//! partitions a collection into recency tiers and picks up to three
//! "remember this?" candidates across distinct rationale lanes.
//!
//! Zero I/O — every function is pure given its explicit inputs. Time enters
//! as a `now_ms` parameter, randomness as an injectable `rand::Rng`.

pub mod activity;
pub mod calendar;
pub mod classify;
pub mod constants;
pub mod record;
pub mod resurface;
pub mod template;
pub mod timectx;

pub use activity::{ActivityTier, activity_tier};
pub use calendar::now_unix_millis;
pub use classify::{classify, classify_with};
pub use record::{FileRecord, LifeArea, Rationale, ResurfacingCandidate, TagSuggestion};
pub use resurface::{select_resurfacing, select_resurfacing_seeded};
pub use template::{LifeAreaTemplate, all_templates, template};
pub use timectx::{TimeContext, UiComplexity, time_context};

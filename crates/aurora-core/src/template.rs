//! Static catalogue of life-area templates.
//!
//! Each template pairs a life-area id with its keyword matcher, display
//! copy, and whether the area participates in resurfacing. The catalogue is
//! fixed at build time; callers needing custom keyword sets supply their own
//! id → pattern mapping through [`crate::classify::classify_with`].

use std::sync::LazyLock;

use regex::Regex;

/// One catalogue entry. Template ids are unique; the keyword pattern is
/// matched case-insensitively against file names and paths.
pub struct LifeAreaTemplate {
    pub id: &'static str,
    pub purpose: Option<&'static str>,
    pub tone: Option<&'static str>,
    pub supports_resurfacing: bool,
    pub keywords: Option<Regex>,
    pub search_query: Option<&'static str>,
}

fn keyword_pattern(alternation: &str) -> Option<Regex> {
    // Patterns are compile-time constants; a failure here is a programming
    // error, not a runtime condition.
    Some(Regex::new(&format!("(?i)({alternation})")).unwrap())
}

static TEMPLATES: LazyLock<Vec<LifeAreaTemplate>> = LazyLock::new(|| {
    vec![
        LifeAreaTemplate {
            id: "work",
            purpose: Some("Steady progress without pressure."),
            tone: Some("Tiny steps, clear next actions."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "project|plan|proposal|deck|meeting|notes|ticket|jira|spec|roadmap|review|report",
            ),
            search_query: Some(
                "project OR plan OR proposal OR deck OR meeting OR notes OR ticket OR jira OR spec OR roadmap OR review OR report",
            ),
        },
        LifeAreaTemplate {
            id: "health",
            purpose: Some("Support your body gently."),
            tone: Some("Compassion over perfection."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "workout|run|yoga|stretch|sleep|health|doctor|therapy|pt|gym|meal|nutrition",
            ),
            search_query: Some(
                "workout OR run OR yoga OR stretch OR sleep OR health OR doctor OR therapy OR pt OR gym OR meal OR nutrition",
            ),
        },
        LifeAreaTemplate {
            id: "relationships",
            purpose: Some("Stay connected without guilt."),
            tone: Some("Warm, light, and human."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "friend|friends|family|partner|date|hangout|dinner|birthday|gift|plan|trip|photo|photos",
            ),
            search_query: Some(
                "friend OR family OR partner OR date OR hangout OR dinner OR birthday OR gift OR plan OR trip OR photo",
            ),
        },
        LifeAreaTemplate {
            id: "home",
            purpose: Some("Keep life running with less friction."),
            tone: Some("Small upkeep beats big resets."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "rent|lease|utilities|bills?|receipt|warranty|home|apartment|maintenance|clean|laundry|grocery|insurance",
            ),
            search_query: Some(
                "rent OR lease OR utilities OR bill OR receipt OR warranty OR home OR apartment OR maintenance OR clean OR laundry OR grocery OR insurance",
            ),
        },
        LifeAreaTemplate {
            id: "money",
            purpose: Some("Money clarity without spiraling."),
            tone: Some("Gentle visibility, simple choices."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "invoice|receipt|tax|budget|bank|statement|payment|credit|rent|salary|income|expense|money",
            ),
            search_query: Some(
                "invoice OR receipt OR tax OR budget OR bank OR statement OR payment OR credit OR rent OR salary OR income OR expense OR money",
            ),
        },
        LifeAreaTemplate {
            id: "support",
            purpose: Some("A soft place to land when your brain is loud."),
            tone: Some("Validation first. Then one tiny step."),
            supports_resurfacing: true,
            keywords: keyword_pattern(
                "adhd|support|meds?|diagnos|coping|executive|shame|overwhelm|accommodat|burnout|regulation",
            ),
            search_query: Some(
                "adhd OR support OR med OR diagnosis OR coping OR executive OR shame OR overwhelm OR accommodation OR burnout OR regulation",
            ),
        },
        LifeAreaTemplate {
            id: "learning",
            purpose: Some("Curiosity and nourishment, not productivity."),
            tone: Some("Playful, low-pressure exploration."),
            supports_resurfacing: false,
            keywords: keyword_pattern(
                "notebook|notes|study|course|tutorial|language|reading|research|book|article",
            ),
            search_query: Some(
                "notebook OR notes OR study OR course OR tutorial OR language OR reading OR research OR book OR article",
            ),
        },
    ]
});

/// Look up a template by life-area id. Absence is a valid, expected outcome.
pub fn template(id: &str) -> Option<&'static LifeAreaTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// All catalogue entries, in declaration order.
pub fn all_templates() -> &'static [LifeAreaTemplate] {
    &TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_id() {
        let t = template("work").unwrap();
        assert!(t.supports_resurfacing);
        assert!(t.keywords.is_some());
    }

    #[test]
    fn lookup_unknown_id() {
        assert!(template("gardening").is_none());
    }

    #[test]
    fn learning_does_not_resurface() {
        assert!(!template("learning").unwrap().supports_resurfacing);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = all_templates().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all_templates().len());
    }

    #[test]
    fn keywords_match_case_insensitively() {
        let re = template("money").unwrap().keywords.as_ref().unwrap();
        assert!(re.is_match("INVOICE_2024.pdf"));
        assert!(re.is_match("tax-return.xlsx"));
        assert!(!re.is_match("vacation.jpg"));
    }
}

//! Milestone achievements

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::core::config::SimulationConfig;

crate::keyed_enum! {
    pub enum AchievementCategory {
        Family => "family",
        Career => "career",
        Education => "education",
        Financial => "financial",
        Social => "social",
        Personal => "personal",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    /// Milliseconds since the Unix epoch when unlocked
    pub timestamp: i64,
    pub category: AchievementCategory,
}

struct Rule {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: AchievementCategory,
    met: fn(&Character, &SimulationConfig) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        id: "firstChild",
        title: "First Steps",
        description: "Welcome your first child",
        category: AchievementCategory::Family,
        met: has_child,
    },
    Rule {
        id: "wealthy",
        title: "Financial Success",
        description: "Achieve high financial status",
        category: AchievementCategory::Financial,
        met: is_wealthy,
    },
];

fn has_child(character: &Character, _: &SimulationConfig) -> bool {
    character.has_children()
}

fn is_wealthy(character: &Character, config: &SimulationConfig) -> bool {
    character.stats.finances > config.wealthy_threshold
}

/// Achievements newly earned by `character`
///
/// Ids already present in `unlocked` are skipped, so each fires at most once.
pub fn check_achievements(
    character: &Character,
    unlocked: &[Achievement],
    config: &SimulationConfig,
) -> Vec<Achievement> {
    RULES
        .iter()
        .filter(|rule| !unlocked.iter().any(|a| a.id == rule.id))
        .filter(|rule| (rule.met)(character, config))
        .map(|rule| {
            tracing::info!(achievement = rule.id, name = %character.name, "achievement unlocked");
            Achievement {
                id: rule.id.to_string(),
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                unlocked: true,
                timestamp: Utc::now().timestamp_millis(),
                category: rule.category,
            }
        })
        .collect()
}

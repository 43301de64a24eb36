//! Visible stat gauges and stat delta maps

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const STAT_MIN: f32 = 0.0;
pub const STAT_MAX: f32 = 100.0;

/// Clamp a gauge value into [0, 100]
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

crate::keyed_enum! {
    /// Names of the visible stats, as they appear in effect maps
    pub enum StatKind {
        Health => "health",
        Happiness => "happiness",
        Energy => "energy",
        Finances => "finances",
        WorkEthic => "workEthic",
        RelationshipSatisfaction => "relationshipSatisfaction",
        ParentingSkills => "parentingSkills",
        Fertility => "fertility",
        Stress => "stress",
        SocialConnections => "socialConnections",
        WorkLifeBalance => "workLifeBalance",
        EducationQuality => "educationQuality",
    }
}

/// The twelve gauges shown to the player, each within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub health: f32,
    pub happiness: f32,
    pub energy: f32,
    pub finances: f32,
    pub work_ethic: f32,
    pub relationship_satisfaction: f32,
    pub parenting_skills: f32,
    pub fertility: f32,
    pub stress: f32,
    pub social_connections: f32,
    pub work_life_balance: f32,
    pub education_quality: f32,
}

impl Stats {
    /// Every gauge at the same value
    pub fn uniform(value: f32) -> Self {
        let value = clamp_stat(value);
        Self {
            health: value,
            happiness: value,
            energy: value,
            finances: value,
            work_ethic: value,
            relationship_satisfaction: value,
            parenting_skills: value,
            fertility: value,
            stress: value,
            social_connections: value,
            work_life_balance: value,
            education_quality: value,
        }
    }

    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Happiness => self.happiness,
            StatKind::Energy => self.energy,
            StatKind::Finances => self.finances,
            StatKind::WorkEthic => self.work_ethic,
            StatKind::RelationshipSatisfaction => self.relationship_satisfaction,
            StatKind::ParentingSkills => self.parenting_skills,
            StatKind::Fertility => self.fertility,
            StatKind::Stress => self.stress,
            StatKind::SocialConnections => self.social_connections,
            StatKind::WorkLifeBalance => self.work_life_balance,
            StatKind::EducationQuality => self.education_quality,
        }
    }

    fn slot(&mut self, kind: StatKind) -> &mut f32 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Happiness => &mut self.happiness,
            StatKind::Energy => &mut self.energy,
            StatKind::Finances => &mut self.finances,
            StatKind::WorkEthic => &mut self.work_ethic,
            StatKind::RelationshipSatisfaction => &mut self.relationship_satisfaction,
            StatKind::ParentingSkills => &mut self.parenting_skills,
            StatKind::Fertility => &mut self.fertility,
            StatKind::Stress => &mut self.stress,
            StatKind::SocialConnections => &mut self.social_connections,
            StatKind::WorkLifeBalance => &mut self.work_life_balance,
            StatKind::EducationQuality => &mut self.education_quality,
        }
    }

    /// Set a gauge, clamped into range
    pub fn set(&mut self, kind: StatKind, value: f32) {
        *self.slot(kind) = clamp_stat(value);
    }

    /// Add a delta to a gauge, clamped into range
    pub fn adjust(&mut self, kind: StatKind, delta: f32) {
        let current = self.get(kind);
        self.set(kind, current + delta);
    }

    /// New snapshot with every delta in `effects` applied
    pub fn with_effects(&self, effects: &Effects) -> Stats {
        self.with_scaled_effects(effects, |_, delta| delta)
    }

    /// New snapshot with every delta passed through `scale` before it is
    /// added and clamped
    pub fn with_scaled_effects<F>(&self, effects: &Effects, mut scale: F) -> Stats
    where
        F: FnMut(StatKind, f32) -> f32,
    {
        let mut stats = *self;
        for (kind, delta) in effects.iter() {
            stats.adjust(kind, scale(kind, delta));
        }
        stats
    }

    /// Whether every gauge is inside [0, 100]
    pub fn in_bounds(&self) -> bool {
        StatKind::ALL
            .iter()
            .all(|kind| (STAT_MIN..=STAT_MAX).contains(&self.get(*kind)))
    }
}

/// Ordered map of stat deltas
///
/// Serialized as a JSON object keyed by stat name. Unknown names and
/// non-numeric values are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    entries: Vec<(StatKind, f32)>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(StatKind, f32)]) -> Self {
        let mut effects = Self::new();
        for &(kind, delta) in pairs {
            effects.set(kind, delta);
        }
        effects
    }

    /// Build from a loosely-typed JSON object
    ///
    /// Anything that is not an object yields an empty map.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Effects::deserialize(value).unwrap_or_default()
    }

    /// Set the delta for a stat, replacing any earlier entry
    ///
    /// Non-finite deltas are dropped.
    pub fn set(&mut self, kind: StatKind, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = delta,
            None => self.entries.push((kind, delta)),
        }
    }

    pub fn get(&self, kind: StatKind) -> Option<f32> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, d)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Effects {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, delta) in &self.entries {
            map.serialize_entry(kind.as_str(), delta)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Effects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EffectsVisitor;

        impl<'de> Visitor<'de> for EffectsVisitor {
            type Value = Effects;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of stat names to numeric deltas")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Effects, A::Error> {
                let mut effects = Effects::new();
                while let Some((name, value)) = map.next_entry::<String, serde_json::Value>()? {
                    let Ok(kind) = name.parse::<StatKind>() else {
                        continue;
                    };
                    if let Some(delta) = value.as_f64() {
                        effects.set(kind, delta as f32);
                    }
                }
                Ok(effects)
            }
        }

        deserializer.deserialize_map(EffectsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_both_ends() {
        let mut stats = Stats::uniform(50.0);
        stats.adjust(StatKind::Health, 500.0);
        stats.adjust(StatKind::Stress, -500.0);
        assert_eq!(stats.health, 100.0);
        assert_eq!(stats.stress, 0.0);
    }

    #[test]
    fn test_with_effects_leaves_original_untouched() {
        let stats = Stats::uniform(40.0);
        let effects = Effects::from_pairs(&[(StatKind::Finances, 10.0), (StatKind::Energy, -5.0)]);
        let updated = stats.with_effects(&effects);
        assert_eq!(stats.finances, 40.0);
        assert_eq!(updated.finances, 50.0);
        assert_eq!(updated.energy, 35.0);
        assert_eq!(updated.health, 40.0);
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut effects = Effects::from_pairs(&[(StatKind::Happiness, 5.0)]);
        effects.set(StatKind::Happiness, -3.0);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.get(StatKind::Happiness), Some(-3.0));
    }

    #[test]
    fn test_non_finite_deltas_are_dropped() {
        let effects = Effects::from_pairs(&[
            (StatKind::Health, f32::NAN),
            (StatKind::Stress, f32::INFINITY),
            (StatKind::Energy, -4.0),
        ]);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects.get(StatKind::Health), None);

        let mut effects = Effects::from_pairs(&[(StatKind::Happiness, 5.0)]);
        effects.set(StatKind::Happiness, f32::NAN);
        assert_eq!(effects.get(StatKind::Happiness), Some(5.0));

        let stats = Stats::uniform(50.0).with_effects(&effects);
        assert!(stats.in_bounds());
    }

    #[test]
    fn test_from_json_ignores_unknown_and_non_numeric() {
        let value = serde_json::json!({
            "happiness": 5,
            "charisma": 10,
            "stress": "lots",
            "workEthic": -2.5,
        });
        let effects = Effects::from_json(&value);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects.get(StatKind::Happiness), Some(5.0));
        assert_eq!(effects.get(StatKind::WorkEthic), Some(-2.5));
        assert_eq!(effects.get(StatKind::Stress), None);
    }

    #[test]
    fn test_from_json_non_object_is_empty() {
        assert!(Effects::from_json(&serde_json::json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_effects_serialize_as_object_in_order() {
        let effects = Effects::from_pairs(&[(StatKind::Stress, 10.0), (StatKind::Energy, -15.0)]);
        let json = serde_json::to_string(&effects).unwrap();
        assert_eq!(json, r#"{"stress":10.0,"energy":-15.0}"#);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(Stats::uniform(1.0)).unwrap();
        assert!(json.get("workLifeBalance").is_some());
        assert!(json.get("relationshipSatisfaction").is_some());
    }
}

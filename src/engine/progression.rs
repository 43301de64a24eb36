//! Yearly aging rules

use crate::character::{Character, StatKind};
use crate::core::config::SimulationConfig;
use crate::core::types::{Gender, LifeValue};

/// The character one year older, with age-driven stat drift applied
pub fn age_character(character: &Character, config: &SimulationConfig) -> Character {
    let mut aged = character.clone();
    aged.age += 1;

    let fertility_loss = fertility_decline(aged.gender, aged.age, config);
    if fertility_loss > 0.0 {
        aged.stats.fertility = (aged.stats.fertility - fertility_loss).max(0.0);
    }

    let health_delta = health_delta(&aged, config);
    aged.stats.adjust(StatKind::Health, health_delta);

    if aged.stats.work_life_balance < config.stress_drift_threshold {
        aged.stats.adjust(StatKind::Stress, config.stress_drift);
    }

    aged
}

/// Fertility lost in the year the character turns `age`
pub fn fertility_decline(gender: Gender, age: u32, config: &SimulationConfig) -> f32 {
    match gender {
        Gender::Female if age > config.female_fertility_decline_age => {
            let years = (age - config.female_fertility_decline_age) as i32;
            config.female_fertility_decline_base.powi(years)
        }
        Gender::Male if age > config.male_fertility_decline_age => {
            let years = (age - config.male_fertility_decline_age) as f32;
            config.male_fertility_decline_rate * years
        }
        _ => 0.0,
    }
}

fn health_delta(character: &Character, config: &SimulationConfig) -> f32 {
    let stats = &character.stats;
    let mut delta = -config.base_health_decay;
    if stats.stress > config.high_stress_threshold {
        delta -= config.high_stress_health_penalty;
    }
    if stats.work_life_balance < config.poor_balance_threshold {
        delta -= config.poor_balance_health_penalty;
    }
    if character.has_value(LifeValue::Health) {
        delta += config.health_value_bonus;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterSpec;
    use crate::core::types::{PersonalityTrait, SexualOrientation};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn person(gender: Gender, values: Vec<LifeValue>) -> Character {
        let spec = CharacterSpec {
            name: "Lee".into(),
            gender,
            sexual_orientation: SexualOrientation::Heterosexual,
            country_key: "sweden".into(),
            personality_traits: vec![PersonalityTrait::Independent],
            life_values: values,
        };
        spec.build(&SimulationConfig::default(), &mut ChaCha8Rng::seed_from_u64(21))
    }

    #[test]
    fn test_fertility_thresholds() {
        let config = SimulationConfig::default();
        assert_eq!(fertility_decline(Gender::Female, 35, &config), 0.0);
        assert!((fertility_decline(Gender::Female, 36, &config) - 1.05).abs() < 1e-5);
        assert!((fertility_decline(Gender::Female, 40, &config) - 1.05f32.powi(5)).abs() < 1e-4);
        assert_eq!(fertility_decline(Gender::Male, 45, &config), 0.0);
        assert_eq!(fertility_decline(Gender::Male, 50, &config), 2.5);
    }

    #[test]
    fn test_fertility_floors_at_zero() {
        let config = SimulationConfig::default();
        let mut c = person(Gender::Female, vec![]);
        c.age = 70;
        c.stats.fertility = 3.0;
        let aged = age_character(&c, &config);
        assert_eq!(aged.stats.fertility, 0.0);
    }

    #[test]
    fn test_health_penalties_stack() {
        let config = SimulationConfig::default();
        let mut c = person(Gender::Male, vec![]);
        c.stats.health = 50.0;
        c.stats.stress = 80.0;
        c.stats.work_life_balance = 30.0;
        let aged = age_character(&c, &config);
        assert!((aged.stats.health - 48.7).abs() < 1e-4);
        assert_eq!(aged.stats.stress, 81.0);
    }

    #[test]
    fn test_health_value_softens_decay() {
        let config = SimulationConfig::default();
        let mut c = person(Gender::Male, vec![LifeValue::Health]);
        c.stats.health = 50.0;
        let aged = age_character(&c, &config);
        assert!((aged.stats.health - 49.8).abs() < 1e-4);
        // balance 60 is above the drift threshold
        assert_eq!(aged.stats.stress, c.stats.stress);
    }

    #[test]
    fn test_stress_capped_at_max() {
        let config = SimulationConfig::default();
        let mut c = person(Gender::Female, vec![]);
        c.stats.stress = 100.0;
        c.stats.work_life_balance = 10.0;
        assert_eq!(age_character(&c, &config).stats.stress, 100.0);
    }
}

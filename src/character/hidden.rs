//! Attributes derived once at creation and never shown to the player

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::stats::clamp_stat;
use crate::core::config::SimulationConfig;
use crate::core::types::{Gender, LifeValue, PersonalityTrait};

/// Hidden biases, each within [0, 100]
///
/// Fixed for the whole run. Nothing in the yearly progression mutates them;
/// they only shape the starting stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenAttributes {
    pub fertility_potential: f32,
    pub mental_health_predisposition: f32,
    pub family_values_influence: f32,
    pub career_ambition: f32,
    pub adaptability: f32,
    pub social_need: f32,
}

impl HiddenAttributes {
    /// Derive the attribute set for a new character
    pub fn derive<R: Rng + ?Sized>(
        gender: Gender,
        traits: &[PersonalityTrait],
        values: &[LifeValue],
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Self {
        let has_trait = |t: PersonalityTrait| traits.contains(&t);

        Self {
            fertility_potential: fertility_potential(gender, traits, config, rng),
            mental_health_predisposition: mental_health_predisposition(traits, config, rng),
            family_values_influence: boosted(values.contains(&LifeValue::Family), rng),
            career_ambition: if has_trait(PersonalityTrait::Ambitious) {
                rng.gen_range(70.0..100.0)
            } else {
                rng.gen_range(20.0..80.0)
            },
            adaptability: boosted(has_trait(PersonalityTrait::Adventurous), rng),
            social_need: boosted(has_trait(PersonalityTrait::Social), rng),
        }
    }
}

/// High band when the driving trait or value is present, middle band otherwise
fn boosted<R: Rng + ?Sized>(present: bool, rng: &mut R) -> f32 {
    if present {
        rng.gen_range(70.0..100.0)
    } else {
        rng.gen_range(25.0..75.0)
    }
}

fn jitter<R: Rng + ?Sized>(half_width: f32, rng: &mut R) -> f32 {
    if half_width <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half_width..half_width)
}

fn fertility_potential<R: Rng + ?Sized>(
    gender: Gender,
    traits: &[PersonalityTrait],
    config: &SimulationConfig,
    rng: &mut R,
) -> f32 {
    let mut base = match gender {
        Gender::Female => 85.0,
        Gender::Male => 90.0,
    };
    if traits.contains(&PersonalityTrait::Nurturing) {
        base += 10.0;
    }
    if traits.contains(&PersonalityTrait::Stable) {
        base += 5.0;
    }
    clamp_stat(base + jitter(config.fertility_potential_jitter, rng))
}

fn mental_health_predisposition<R: Rng + ?Sized>(
    traits: &[PersonalityTrait],
    config: &SimulationConfig,
    rng: &mut R,
) -> f32 {
    let mut base = 50.0;
    if traits.contains(&PersonalityTrait::Stable) {
        base -= 15.0;
    }
    if traits.contains(&PersonalityTrait::Ambitious) {
        base += 10.0;
    }
    if traits.contains(&PersonalityTrait::Social) {
        base -= 5.0;
    }
    clamp_stat(base + jitter(config.mental_health_jitter, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_attributes_stay_in_range_across_seeds() {
        let config = SimulationConfig::default();
        let traits = [PersonalityTrait::Nurturing, PersonalityTrait::Stable];
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let hidden = HiddenAttributes::derive(Gender::Male, &traits, &[], &config, &mut rng);
            for value in [
                hidden.fertility_potential,
                hidden.mental_health_predisposition,
                hidden.family_values_influence,
                hidden.career_ambition,
                hidden.adaptability,
                hidden.social_need,
            ] {
                assert!((0.0..=100.0).contains(&value), "seed {} produced {}", seed, value);
            }
        }
    }

    #[test]
    fn test_traits_push_attributes_into_high_band() {
        let config = SimulationConfig::default();
        let traits = [
            PersonalityTrait::Ambitious,
            PersonalityTrait::Adventurous,
            PersonalityTrait::Social,
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let hidden = HiddenAttributes::derive(
            Gender::Female,
            &traits,
            &[LifeValue::Family],
            &config,
            &mut rng,
        );
        assert!(hidden.career_ambition >= 70.0);
        assert!(hidden.adaptability >= 70.0);
        assert!(hidden.social_need >= 70.0);
        assert!(hidden.family_values_influence >= 70.0);
    }

    #[test]
    fn test_zero_jitter_is_deterministic() {
        let config = SimulationConfig {
            fertility_potential_jitter: 0.0,
            mental_health_jitter: 0.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let hidden = HiddenAttributes::derive(
            Gender::Female,
            &[PersonalityTrait::Stable],
            &[],
            &config,
            &mut rng,
        );
        assert_eq!(hidden.fertility_potential, 90.0);
        assert_eq!(hidden.mental_health_predisposition, 35.0);
    }
}

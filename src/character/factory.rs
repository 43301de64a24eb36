//! Character creation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::hidden::HiddenAttributes;
use crate::character::stats::{clamp_stat, Stats};
use crate::character::Character;
use crate::core::config::{config, SimulationConfig};
use crate::core::error::{LifeSimError, Result};
use crate::core::types::{
    CharacterId, EducationLevel, Gender, LifeValue, PersonalityTrait, RelationshipStatus,
    SexualOrientation,
};
use crate::country::{get_country, Country};

/// Minimum trimmed name length accepted by [`CharacterSpec::validate`]
pub const MIN_NAME_LEN: usize = 2;
/// Maximum number of personality traits or life values
pub const MAX_SELECTIONS: usize = 3;

/// Everything the player picks on the creation screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSpec {
    pub name: String,
    pub gender: Gender,
    pub sexual_orientation: SexualOrientation,
    pub country_key: String,
    pub personality_traits: Vec<PersonalityTrait>,
    pub life_values: Vec<LifeValue>,
}

impl CharacterSpec {
    /// Check the player's input before building
    ///
    /// The factory itself trusts its input; callers run this first.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(LifeSimError::InvalidName {
                name: self.name.clone(),
                min: MIN_NAME_LEN,
            });
        }
        let traits = dedup(&self.personality_traits);
        if traits.is_empty() {
            return Err(LifeSimError::NoTraits);
        }
        if traits.len() > MAX_SELECTIONS {
            return Err(LifeSimError::TooManyTraits {
                count: traits.len(),
                max: MAX_SELECTIONS,
            });
        }
        let values = dedup(&self.life_values);
        if values.len() > MAX_SELECTIONS {
            return Err(LifeSimError::TooManyValues {
                count: values.len(),
                max: MAX_SELECTIONS,
            });
        }
        Ok(())
    }

    /// Build the starting character
    pub fn build<R: Rng + ?Sized>(&self, config: &SimulationConfig, rng: &mut R) -> Character {
        let country = get_country(&self.country_key);
        let traits = dedup(&self.personality_traits);
        let values = dedup(&self.life_values);

        let hidden = HiddenAttributes::derive(self.gender, &traits, &values, config, rng);
        let stats = initial_stats(&traits, &values, &country, &hidden, config);

        tracing::debug!(
            name = %self.name,
            country = %country.name,
            fertility_potential = hidden.fertility_potential,
            "created character"
        );

        Character {
            id: CharacterId::new(),
            name: self.name.trim().to_string(),
            gender: self.gender,
            sexual_orientation: self.sexual_orientation,
            age: config.starting_age,
            education_level: EducationLevel::HighSchool,
            relationship_status: RelationshipStatus::Single,
            partner: None,
            children: Vec::new(),
            job: None,
            housing: None,
            country,
            stats,
            events: Vec::new(),
            personality_traits: traits,
            life_values: values,
            hidden_attributes: hidden,
            parenting_style: None,
            mental_health_history: Vec::new(),
            social_circle: Vec::new(),
        }
    }
}

/// Build a starting character using the global config
pub fn create_character<R: Rng + ?Sized>(
    name: &str,
    gender: Gender,
    sexual_orientation: SexualOrientation,
    country_key: &str,
    personality_traits: &[PersonalityTrait],
    life_values: &[LifeValue],
    rng: &mut R,
) -> Character {
    let spec = CharacterSpec {
        name: name.to_string(),
        gender,
        sexual_orientation,
        country_key: country_key.to_string(),
        personality_traits: personality_traits.to_vec(),
        life_values: life_values.to_vec(),
    };
    spec.build(config(), rng)
}

/// A newborn for `parent`, sharing the parent's country
pub fn create_child<R: Rng + ?Sized>(parent: &Character, rng: &mut R) -> Character {
    let gender = if rng.gen_bool(0.5) { Gender::Female } else { Gender::Male };
    let hidden = HiddenAttributes::derive(gender, &[], &[], config(), rng);
    let mut stats = Stats::uniform(50.0);
    stats.health = 100.0;
    stats.energy = 100.0;
    stats.stress = 0.0;
    stats.fertility = 0.0;
    stats.finances = 0.0;
    stats.parenting_skills = 0.0;

    Character {
        id: CharacterId::new(),
        name: format!("{}'s child #{}", parent.name, parent.children.len() + 1),
        gender,
        sexual_orientation: SexualOrientation::Heterosexual,
        age: 0,
        education_level: EducationLevel::Elementary,
        relationship_status: RelationshipStatus::Single,
        partner: None,
        children: Vec::new(),
        job: None,
        housing: None,
        country: parent.country.clone(),
        stats,
        events: Vec::new(),
        personality_traits: Vec::new(),
        life_values: Vec::new(),
        hidden_attributes: hidden,
        parenting_style: None,
        mental_health_history: Vec::new(),
        social_circle: Vec::new(),
    }
}

fn initial_stats(
    traits: &[PersonalityTrait],
    values: &[LifeValue],
    country: &Country,
    hidden: &HiddenAttributes,
    config: &SimulationConfig,
) -> Stats {
    let has = |t: PersonalityTrait| traits.contains(&t);

    Stats {
        health: 100.0,
        happiness: initial_happiness(traits, values),
        energy: 90.0,
        finances: initial_finances(country, config),
        work_ethic: if has(PersonalityTrait::Ambitious) { 80.0 } else { 60.0 },
        relationship_satisfaction: 50.0,
        parenting_skills: if has(PersonalityTrait::Nurturing) { 30.0 } else { 10.0 },
        // no age penalty at the starting age
        fertility: hidden.fertility_potential.floor(),
        stress: 20.0,
        social_connections: if has(PersonalityTrait::Social) { 70.0 } else { 40.0 },
        work_life_balance: 60.0,
        education_quality: 70.0,
    }
}

fn initial_happiness(traits: &[PersonalityTrait], values: &[LifeValue]) -> f32 {
    let mut happiness = 70.0;
    if traits.contains(&PersonalityTrait::Nurturing) {
        happiness += 10.0;
    }
    if traits.contains(&PersonalityTrait::Social) {
        happiness += 5.0;
    }
    if values.contains(&LifeValue::Health) {
        happiness += 5.0;
    }
    clamp_stat(happiness)
}

fn initial_finances(country: &Country, config: &SimulationConfig) -> f32 {
    let modifier = (country.economy.average_salary / config.baseline_salary) * 20.0;
    (50.0 + modifier).clamp(20.0, 80.0)
}

fn dedup<T: PartialEq + Copy>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(*item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spec(name: &str) -> CharacterSpec {
        CharacterSpec {
            name: name.into(),
            gender: Gender::Female,
            sexual_orientation: SexualOrientation::Heterosexual,
            country_key: "usa".into(),
            personality_traits: vec![PersonalityTrait::Ambitious],
            life_values: vec![LifeValue::Career],
        }
    }

    #[test]
    fn test_validate_rejects_short_names() {
        assert!(matches!(
            spec(" A ").validate(),
            Err(LifeSimError::InvalidName { .. })
        ));
        assert!(spec("Al").validate().is_ok());
    }

    #[test]
    fn test_validate_requires_a_trait() {
        let mut s = spec("Alex");
        s.personality_traits.clear();
        assert!(matches!(s.validate(), Err(LifeSimError::NoTraits)));
    }

    #[test]
    fn test_validate_caps_selections() {
        let mut s = spec("Alex");
        s.personality_traits = vec![
            PersonalityTrait::Ambitious,
            PersonalityTrait::Social,
            PersonalityTrait::Stable,
            PersonalityTrait::Creative,
        ];
        assert!(matches!(s.validate(), Err(LifeSimError::TooManyTraits { count: 4, .. })));

        let mut s = spec("Alex");
        s.life_values = vec![
            LifeValue::Career,
            LifeValue::Family,
            LifeValue::Health,
            LifeValue::Wealth,
        ];
        assert!(matches!(s.validate(), Err(LifeSimError::TooManyValues { count: 4, .. })));
    }

    #[test]
    fn test_duplicate_selections_count_once() {
        let mut s = spec("Alex");
        s.personality_traits = vec![PersonalityTrait::Ambitious; 5];
        assert!(s.validate().is_ok());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let character = s.build(&SimulationConfig::default(), &mut rng);
        assert_eq!(character.personality_traits, vec![PersonalityTrait::Ambitious]);
    }

    #[test]
    fn test_starting_character_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let character = spec("Alex").build(&SimulationConfig::default(), &mut rng);
        assert_eq!(character.age, 18);
        assert_eq!(character.education_level, EducationLevel::HighSchool);
        assert_eq!(character.relationship_status, RelationshipStatus::Single);
        assert!(character.children.is_empty());
        assert!(character.events.is_empty());
        assert_eq!(character.stats.health, 100.0);
        assert_eq!(character.stats.work_ethic, 80.0);
        assert_eq!(character.stats.parenting_skills, 10.0);
        assert_eq!(
            character.stats.fertility,
            character.hidden_attributes.fertility_potential.floor()
        );
        assert!(character.stats.in_bounds());
    }

    #[test]
    fn test_initial_finances_scale_with_salary() {
        let config = SimulationConfig::default();
        // 65k / 50k * 20 = 26
        assert_eq!(initial_finances(&get_country("usa"), &config), 76.0);
        assert_eq!(initial_finances(&get_country("custom"), &config), 70.0);
        // yen salaries saturate the clamp
        assert_eq!(initial_finances(&get_country("japan"), &config), 80.0);
    }

    #[test]
    fn test_unknown_country_uses_custom() {
        let mut s = spec("Alex");
        s.country_key = "atlantis".into();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let character = s.build(&SimulationConfig::default(), &mut rng);
        assert!(character.country.is_custom());
    }

    #[test]
    fn test_happiness_bonuses() {
        let happiness = initial_happiness(
            &[PersonalityTrait::Nurturing, PersonalityTrait::Social],
            &[LifeValue::Health],
        );
        assert_eq!(happiness, 90.0);
    }

    #[test]
    fn test_child_inherits_country() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let parent = spec("Alex").build(&SimulationConfig::default(), &mut rng);
        let child = create_child(&parent, &mut rng);
        assert_eq!(child.age, 0);
        assert_eq!(child.country.key, "usa");
        assert_eq!(child.name, "Alex's child #1");
    }
}

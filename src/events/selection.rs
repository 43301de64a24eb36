//! Weighted event selection

use rand::Rng;

use crate::character::Character;
use crate::core::types::{LifeValue, PersonalityTrait};
use crate::events::catalog::{create_event, EventKind};
use crate::events::life_stage::eligible_events;
use crate::events::types::{Category, LifeEvent};

/// Selection weight of `kind` for `character`
///
/// Starts at 1 and is scaled when the event's category matches one of the
/// character's traits or values.
pub fn event_weight(kind: EventKind, character: &Character) -> f64 {
    let mut weight = 1.0;
    match kind.category() {
        Category::Career if character.has_trait(PersonalityTrait::Ambitious) => weight *= 1.5,
        Category::Family if character.has_trait(PersonalityTrait::Nurturing) => weight *= 1.5,
        Category::Social if character.has_trait(PersonalityTrait::Social) => weight *= 1.3,
        Category::Education if character.has_value(LifeValue::Career) => weight *= 1.2,
        Category::Relationship if character.has_value(LifeValue::Family) => weight *= 1.3,
        _ => {}
    }
    weight
}

/// Eligible events for the character's age, paired with their weights
pub fn weighted_candidates(character: &Character) -> Vec<(EventKind, f64)> {
    eligible_events(character)
        .into_iter()
        .map(|kind| (kind, event_weight(kind, character)))
        .collect()
}

/// Roulette-wheel pick over `(item, weight)` pairs
///
/// Returns `None` for an empty list or a non-positive total. If rounding
/// leaves the wheel short, the last item wins.
pub fn roulette<T: Copy, R: Rng + ?Sized>(candidates: &[(T, f64)], rng: &mut R) -> Option<T> {
    let total: f64 = candidates.iter().map(|(_, w)| *w).sum();
    if candidates.is_empty() || total <= 0.0 {
        return None;
    }
    let mut r = rng.gen_range(0.0..total);
    for (item, weight) in candidates {
        r -= weight;
        if r <= 0.0 {
            return Some(*item);
        }
    }
    candidates.last().map(|(item, _)| *item)
}

/// Pick and instantiate the next event for `character`, if any is eligible
pub fn select_event<R: Rng + ?Sized>(
    character: &Character,
    year: i32,
    rng: &mut R,
) -> Option<LifeEvent> {
    let candidates = weighted_candidates(character);
    let kind = roulette(&candidates, rng)?;
    tracing::debug!(
        event = %kind,
        candidates = candidates.len(),
        age = character.age,
        "selected event"
    );
    Some(create_event(kind, year, character, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterSpec;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Gender, SexualOrientation};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn with(traits: Vec<PersonalityTrait>, values: Vec<LifeValue>) -> Character {
        let spec = CharacterSpec {
            name: "Kim".into(),
            gender: Gender::Female,
            sexual_orientation: SexualOrientation::Homosexual,
            country_key: "japan".into(),
            personality_traits: traits,
            life_values: values,
        };
        spec.build(&SimulationConfig::default(), &mut ChaCha8Rng::seed_from_u64(11))
    }

    #[test]
    fn test_weights_follow_traits_and_values() {
        let c = with(
            vec![PersonalityTrait::Ambitious, PersonalityTrait::Social],
            vec![LifeValue::Career, LifeValue::Family],
        );
        assert_eq!(event_weight(EventKind::JobOffer, &c), 1.5);
        assert_eq!(event_weight(EventKind::VolunteerWork, &c), 1.3);
        assert_eq!(event_weight(EventKind::StudyAbroad, &c), 1.2);
        assert_eq!(event_weight(EventKind::DatingApp, &c), 1.3);
        assert_eq!(event_weight(EventKind::HealthCrisis, &c), 1.0);
        assert_eq!(event_weight(EventKind::Adoption, &c), 1.0);
    }

    #[test]
    fn test_single_candidate_always_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(roulette(&[(EventKind::Retirement, 1.0)], &mut rng), Some(EventKind::Retirement));
        }
    }

    #[test]
    fn test_empty_or_weightless_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(roulette::<EventKind, _>(&[], &mut rng), None);
        assert_eq!(roulette(&[(1u8, 0.0), (2u8, 0.0)], &mut rng), None);
    }

    #[test]
    fn test_roulette_respects_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let wheel = [('a', 1.0), ('b', 9.0)];
        let hits = (0..2000)
            .filter(|_| roulette(&wheel, &mut rng) == Some('b'))
            .count();
        assert!(hits > 1600 && hits < 1980, "b drawn {} times", hits);
    }

    #[test]
    fn test_selected_event_is_from_the_pool() {
        let c = with(vec![PersonalityTrait::Stable], vec![]);
        let pool = eligible_events(&c);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let event = select_event(&c, 2040, &mut rng).unwrap();
            assert!(pool.contains(&event.kind));
            assert_eq!(event.timestamp, 2040);
        }
    }
}

//! Choice resolution

use chrono::Utc;
use rand::Rng;

use crate::character::{create_child, Character, StatKind, Stats};
use crate::core::types::{PersonalityTrait, RelationshipStatus};
use crate::engine::state::{CharacterSnapshot, GameState, PlayerDecision};
use crate::events::{Choice, Transition};

/// Resolve the pending event with the choice at `choice_index`
///
/// Uses thread-local randomness for anything the choice spawns. See
/// [`resolve_choice`] for a seeded variant.
pub fn make_choice(state: &GameState, event_key: &str, choice_index: usize) -> GameState {
    resolve_choice(state, event_key, choice_index, &mut rand::thread_rng())
}

/// Resolve the pending event with the choice at `choice_index`
///
/// Returns an unchanged copy when nothing is pending or the index is out of
/// range. The choice is always looked up on the pending event; `event_key`
/// is only what gets logged in the decision. Allowed after game over so a
/// final event can still be answered.
pub fn resolve_choice<R: Rng + ?Sized>(
    state: &GameState,
    event_key: &str,
    choice_index: usize,
    rng: &mut R,
) -> GameState {
    let Some(event) = state.current_event.as_ref() else {
        return state.clone();
    };
    let Some(choice) = event.choice(choice_index) else {
        tracing::debug!(event = event_key, choice_index, "choice index out of range");
        return state.clone();
    };

    let decision = PlayerDecision {
        event_type: event_key.to_string(),
        choice_made: choice.text.clone(),
        character_state: CharacterSnapshot::of(&state.character),
        country: state.character.country.name.clone(),
        timestamp: Utc::now().timestamp_millis(),
    };

    let mut character = state.character.clone();
    character.stats = apply_choice_effects(&character, choice);
    if let Some(transition) = choice.transition {
        apply_transition(&mut character, transition, rng);
    }
    character.events.push(event.clone());

    tracing::debug!(
        event = event_key,
        choice = %choice.text,
        age = character.age,
        "choice made"
    );

    let mut decisions = state.decisions.clone();
    decisions.push(decision);

    GameState {
        character,
        decisions,
        current_event: None,
        ..state.clone()
    }
}

/// Stats after applying `choice`, scaled by the character's traits
pub fn apply_choice_effects(character: &Character, choice: &Choice) -> Stats {
    let nurturing = character.has_trait(PersonalityTrait::Nurturing);
    let ambitious = character.has_trait(PersonalityTrait::Ambitious);
    let stable = character.has_trait(PersonalityTrait::Stable);

    character
        .stats
        .with_scaled_effects(&choice.effects, |kind, delta| match kind {
            StatKind::Happiness if nurturing => delta * 1.1,
            StatKind::WorkEthic if ambitious => delta * 1.2,
            StatKind::Stress if stable => delta * 0.8,
            _ => delta,
        })
}

fn apply_transition<R: Rng + ?Sized>(character: &mut Character, transition: Transition, rng: &mut R) {
    match transition {
        Transition::StartDating => {
            if !character.relationship_status.is_partnered() {
                character.relationship_status = RelationshipStatus::Dating;
            }
        }
        Transition::Marry => character.relationship_status = RelationshipStatus::Married,
        Transition::EndRelationship => {
            character.relationship_status = match character.relationship_status {
                RelationshipStatus::Married => RelationshipStatus::Divorced,
                _ => RelationshipStatus::Single,
            };
            character.partner = None;
        }
        Transition::HaveChild => {
            let child = create_child(character, rng);
            character.children.push(child);
        }
        Transition::AdvanceEducation => {
            character.education_level = character.education_level.next();
        }
    }
}

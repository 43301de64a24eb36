//! Year advance
//!
//! One call moves the game forward a single year:
//! aging -> economy roll -> event selection -> achievements -> calendar -> end check

use rand::Rng;

use crate::core::config::{config, SimulationConfig};
use crate::engine::achievements::check_achievements;
use crate::engine::economy::roll_economic_event;
use crate::engine::progression::age_character;
use crate::engine::state::GameState;
use crate::events::select_event;

/// Advance one year using the global config
pub fn simulate_year<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    simulate_year_with(state, config(), rng)
}

/// Advance one year
///
/// A paused or finished game, or one still waiting on a choice, comes back
/// unchanged.
pub fn simulate_year_with<R: Rng + ?Sized>(
    state: &GameState,
    config: &SimulationConfig,
    rng: &mut R,
) -> GameState {
    if state.paused || state.game_over || state.current_event.is_some() {
        return state.clone();
    }

    let character = age_character(&state.character, config);

    let mut economic_events = state.economic_events.clone();
    if let Some(event) = roll_economic_event(state.current_year, config.economic_event_chance, rng)
    {
        tracing::debug!(kind = %event.kind, severity = event.severity, "economic event");
        economic_events.push(event);
    }

    let current_event = select_event(&character, state.current_year, rng);

    let mut achievements = state.achievements.clone();
    achievements.extend(check_achievements(&character, &achievements, config));

    let game_over = character.age >= config.game_over_age || character.stats.health <= 0.0;

    tracing::debug!(
        year = state.current_year,
        age = character.age,
        health = character.stats.health,
        event = current_event.as_ref().map(|e| e.key()),
        "simulated year"
    );
    if game_over {
        tracing::info!(
            name = %character.name,
            age = character.age,
            health = character.stats.health,
            "game over"
        );
    }

    GameState {
        character,
        current_year: state.current_year + 1,
        game_over,
        current_event,
        economic_events,
        achievements,
        ..state.clone()
    }
}

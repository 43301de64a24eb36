//! Timed game loop
//!
//! [`GameDriver`] owns the state and a seeded RNG and decides when the game
//! may tick: never while paused, finished, or waiting on a player choice.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::{config, SimulationConfig};
use crate::engine::choice::resolve_choice;
use crate::engine::state::{set_game_speed_with, toggle_pause, GameState};
use crate::engine::tick::simulate_year_with;
use crate::events::LifeEvent;

pub struct GameDriver {
    state: GameState,
    config: SimulationConfig,
    rng: ChaCha8Rng,
}

impl GameDriver {
    /// Driver using the global config
    pub fn new(state: GameState, seed: u64) -> Self {
        Self::with_config(state, config().clone(), seed)
    }

    pub fn with_config(state: GameState, config: SimulationConfig, seed: u64) -> Self {
        Self {
            state,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Wall-clock time between ticks at the current speed
    pub fn tick_interval(&self) -> Duration {
        let speed = u64::from(self.state.game_speed.max(1));
        Duration::from_millis(self.config.base_tick_ms / speed)
    }

    pub fn can_advance(&self) -> bool {
        !self.state.paused && !self.state.game_over && self.state.current_event.is_none()
    }

    pub fn toggle_pause(&mut self) {
        self.state = toggle_pause(&self.state);
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.state = set_game_speed_with(&self.state, speed, &self.config);
    }

    /// Tick one year if allowed. Returns whether a tick happened.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.state = simulate_year_with(&self.state, &self.config, &mut self.rng);
        true
    }

    /// Answer the pending event. Returns whether it was resolved.
    pub fn choose(&mut self, choice_index: usize) -> bool {
        let Some(key) = self.state.current_event.as_ref().map(|e| e.key()) else {
            return false;
        };
        let next = resolve_choice(&self.state, key, choice_index, &mut self.rng);
        let resolved = next.current_event.is_none();
        self.state = next;
        resolved
    }

    /// Clear a pending event that offers no choices
    ///
    /// The event is archived to the character's history without a decision.
    pub fn dismiss_if_choiceless(&mut self) -> bool {
        match self.state.current_event.take() {
            Some(event) if event.choices.is_empty() => {
                tracing::debug!(event = event.key(), "dismissed event without choices");
                self.state.character.events.push(event);
                true
            }
            other => {
                self.state.current_event = other;
                false
            }
        }
    }

    /// Swap in a new game, returning the old one
    pub fn reset(&mut self, state: GameState) -> GameState {
        std::mem::replace(&mut self.state, state)
    }

    /// Resolve whatever is pending, using `chooser` for the index
    fn settle<F>(&mut self, chooser: &mut F)
    where
        F: FnMut(&GameState, &LifeEvent) -> usize,
    {
        if self.dismiss_if_choiceless() {
            return;
        }
        if let Some(event) = self.state.current_event.clone() {
            let index = chooser(&self.state, &event).min(event.choices.len() - 1);
            self.choose(index);
        }
    }

    /// Play without delays until game over or `max_years` ticks
    ///
    /// Returns the number of years simulated.
    pub fn run_headless<F>(&mut self, max_years: Option<u32>, mut chooser: F) -> u32
    where
        F: FnMut(&GameState, &LifeEvent) -> usize,
    {
        let mut years = 0;
        loop {
            self.settle(&mut chooser);
            if max_years.is_some_and(|max| years >= max) || !self.advance() {
                break;
            }
            years += 1;
        }
        self.settle(&mut chooser);
        years
    }

    /// Play in real time, sleeping one tick interval between years
    pub async fn run<F>(&mut self, max_years: Option<u32>, mut chooser: F) -> u32
    where
        F: FnMut(&GameState, &LifeEvent) -> usize,
    {
        let mut years = 0;
        loop {
            self.settle(&mut chooser);
            if max_years.is_some_and(|max| years >= max) || !self.can_advance() {
                break;
            }
            tokio::time::sleep(self.tick_interval()).await;
            if !self.advance() {
                break;
            }
            years += 1;
        }
        self.settle(&mut chooser);
        years
    }
}

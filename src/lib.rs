//! Life Sim - year-by-year life simulation core

pub mod character;
pub mod core;
pub mod country;
pub mod engine;
pub mod events;

pub use character::{create_character, Character, CharacterSpec};
pub use engine::{initialize_game_state, make_choice, simulate_year, GameDriver, GameState};

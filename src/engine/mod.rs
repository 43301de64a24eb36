//! The simulation engine: yearly progression, choices and the game loop

pub mod achievements;
pub mod choice;
pub mod driver;
pub mod economy;
pub mod progression;
pub mod state;
pub mod tick;

pub use achievements::{check_achievements, Achievement, AchievementCategory};
pub use choice::{make_choice, resolve_choice};
pub use driver::GameDriver;
pub use economy::{roll_economic_event, EconomicEvent, EconomicEventKind};
pub use progression::age_character;
pub use state::{
    initialize_game_state, set_game_speed, set_game_speed_with, toggle_pause, CharacterSnapshot,
    GamePhase, GameState, PlayerDecision,
};
pub use tick::{simulate_year, simulate_year_with};

//! Game state and decision records
//!
//! Every engine operation takes a `&GameState` and returns a fresh value;
//! callers swap the whole state at once.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::core::config::{config, SimulationConfig};
use crate::core::types::{
    EducationLevel, GameMode, Gender, LifeValue, PersonalityTrait, RelationshipStatus,
};
use crate::engine::achievements::Achievement;
use crate::engine::economy::EconomicEvent;
use crate::events::LifeEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub character: Character,
    pub game_speed: u32,
    pub paused: bool,
    pub current_year: i32,
    pub game_over: bool,
    /// Append-only decision log
    pub decisions: Vec<PlayerDecision>,
    /// Event waiting for the player's choice
    pub current_event: Option<LifeEvent>,
    pub mode: GameMode,
    pub economic_events: Vec<EconomicEvent>,
    pub research_data_consent: bool,
    pub achievements: Vec<Achievement>,
}

/// Externally visible lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

impl GameState {
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    pub fn has_pending_event(&self) -> bool {
        self.current_event.is_some()
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}

/// Fresh state for `character`, dated to the real-world current year
pub fn initialize_game_state(character: Character, mode: GameMode) -> GameState {
    GameState {
        character,
        game_speed: config().min_speed,
        paused: false,
        current_year: Utc::now().year(),
        game_over: false,
        decisions: Vec::new(),
        current_event: None,
        mode,
        economic_events: Vec::new(),
        research_data_consent: false,
        achievements: Vec::new(),
    }
}

/// Copy of `state` with the pause flag flipped
pub fn toggle_pause(state: &GameState) -> GameState {
    GameState {
        paused: !state.paused,
        ..state.clone()
    }
}

/// Copy of `state` running at `speed`, clamped to the global config's range
pub fn set_game_speed(state: &GameState, speed: u32) -> GameState {
    set_game_speed_with(state, speed, config())
}

/// Copy of `state` running at `speed`, clamped to `config`'s range
pub fn set_game_speed_with(state: &GameState, speed: u32, config: &SimulationConfig) -> GameState {
    GameState {
        game_speed: speed.clamp(config.min_speed, config.max_speed),
        ..state.clone()
    }
}

/// The character as it was when a decision was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    pub age: u32,
    pub gender: Gender,
    pub education_level: EducationLevel,
    pub relationship_status: RelationshipStatus,
    pub number_of_children: usize,
    pub personality_traits: Vec<PersonalityTrait>,
    pub life_values: Vec<LifeValue>,
}

impl CharacterSnapshot {
    pub fn of(character: &Character) -> Self {
        Self {
            age: character.age,
            gender: character.gender,
            education_level: character.education_level,
            relationship_status: character.relationship_status,
            number_of_children: character.children.len(),
            personality_traits: character.personality_traits.clone(),
            life_values: character.life_values.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDecision {
    pub event_type: String,
    pub choice_made: String,
    pub character_state: CharacterSnapshot,
    pub country: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterSpec;
    use crate::core::config::SimulationConfig;
    use crate::core::types::SexualOrientation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> GameState {
        let spec = CharacterSpec {
            name: "Jo".into(),
            gender: Gender::Male,
            sexual_orientation: SexualOrientation::Heterosexual,
            country_key: "usa".into(),
            personality_traits: vec![PersonalityTrait::Analytical],
            life_values: vec![LifeValue::Wealth],
        };
        let c = spec.build(&SimulationConfig::default(), &mut ChaCha8Rng::seed_from_u64(3));
        initialize_game_state(c, GameMode::Sandbox)
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.game_speed, 1);
        assert!(!s.paused);
        assert!(!s.game_over);
        assert!(s.decisions.is_empty());
        assert!(s.current_event.is_none());
        assert!(!s.research_data_consent);
        assert_eq!(s.current_year, Utc::now().year());
        assert_eq!(s.phase(), GamePhase::Running);
    }

    #[test]
    fn test_pause_round_trip() {
        let s = state();
        let paused = toggle_pause(&s);
        assert_eq!(paused.phase(), GamePhase::Paused);
        assert_eq!(toggle_pause(&paused), s);
    }

    #[test]
    fn test_speed_is_clamped() {
        let s = state();
        assert_eq!(set_game_speed(&s, 0).game_speed, 1);
        assert_eq!(set_game_speed(&s, 3).game_speed, 3);
        assert_eq!(set_game_speed(&s, 12).game_speed, 5);
    }

    #[test]
    fn test_speed_follows_supplied_config() {
        let config = SimulationConfig {
            min_speed: 2,
            max_speed: 10,
            ..SimulationConfig::default()
        };
        let s = state();
        assert_eq!(set_game_speed_with(&s, 8, &config).game_speed, 8);
        assert_eq!(set_game_speed_with(&s, 1, &config).game_speed, 2);
        assert_eq!(set_game_speed_with(&s, 40, &config).game_speed, 10);
    }

    #[test]
    fn test_game_over_wins_over_pause() {
        let mut s = toggle_pause(&state());
        s.game_over = true;
        assert_eq!(s.phase(), GamePhase::GameOver);
    }
}

//! End-to-end life simulation tests

use life_sim::character::{create_character, CharacterSpec, StatKind};
use life_sim::core::config::SimulationConfig;
use life_sim::core::types::{GameMode, Gender, LifeValue, PersonalityTrait, SexualOrientation};
use life_sim::engine::{
    initialize_game_state, make_choice, simulate_year_with, GameDriver, GamePhase, GameState,
};
use life_sim::events::{create_event, EventKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn alex(rng: &mut ChaCha8Rng) -> GameState {
    let character = create_character(
        "Alex",
        Gender::Female,
        SexualOrientation::Heterosexual,
        "usa",
        &[PersonalityTrait::Ambitious],
        &[LifeValue::Career],
        rng,
    );
    initialize_game_state(character, GameMode::Sandbox)
}

#[test]
fn test_alex_twenty_years() {
    let config = SimulationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let start = alex(&mut rng);
    let initial_fertility = start.character.stats.fertility;

    let mut state = start.clone();
    for _ in 0..20 {
        state.current_event = None;
        state = simulate_year_with(&state, &config, &mut rng);
    }

    assert_eq!(state.character.age, 38);
    assert_eq!(state.current_year, start.current_year + 20);
    assert!(!state.game_over);

    let expected_loss = 1.05f32 + 1.05f32.powi(2) + 1.05f32.powi(3);
    let expected = (initial_fertility - expected_loss).max(0.0);
    assert!(
        (state.character.stats.fertility - expected).abs() < 1e-3,
        "fertility {} expected {}",
        state.character.stats.fertility,
        expected
    );
    assert!(state.character.stats.in_bounds());
}

#[test]
fn test_unknown_country_falls_back_to_custom() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let character = create_character(
        "Jamie",
        Gender::Male,
        SexualOrientation::Heterosexual,
        "atlantis",
        &[PersonalityTrait::Stable],
        &[],
        &mut rng,
    );
    assert!(character.country.is_custom());
    assert_eq!(character.country.economy.average_salary, 50_000.0);
    // 50 + 50000/50000*20
    assert_eq!(character.stats.finances, 70.0);
}

#[test]
fn test_turning_eighty_ends_the_game() {
    let config = SimulationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = alex(&mut rng);
    state.character.age = 79;
    state.character.stats.health = 100.0;

    let next = simulate_year_with(&state, &config, &mut rng);
    assert_eq!(next.character.age, 80);
    assert!(next.game_over);
    assert_eq!(next.phase(), GamePhase::GameOver);

    // further ticks do nothing
    assert_eq!(simulate_year_with(&next, &config, &mut rng), next);
}

#[test]
fn test_first_choice_applies_only_its_effects() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut state = alex(&mut rng);
    let event = create_event(EventKind::JobOffer, state.current_year, &state.character, &mut rng);
    state.current_event = Some(event);

    let next = make_choice(&state, "jobOffer", 0);
    let before = state.character.stats;
    let after = next.character.stats;

    assert!(next.current_event.is_none());
    assert_eq!(next.decisions.len(), 1);
    assert_eq!(next.character.events.len(), 1);
    assert_eq!(after.finances, before.finances + 10.0);
    assert_eq!(after.energy, before.energy - 5.0);
    // ambitious scales work ethic gains
    assert!((after.work_ethic - (before.work_ethic + 6.0)).abs() < 1e-4);
    for kind in StatKind::ALL {
        if !matches!(kind, StatKind::Finances | StatKind::Energy | StatKind::WorkEthic) {
            assert_eq!(after.get(*kind), before.get(*kind), "{} changed", kind);
        }
    }
}

#[test]
fn test_make_choice_without_event_is_identity() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let state = alex(&mut rng);
    assert_eq!(make_choice(&state, "promotion", 0), state);
}

#[test]
fn test_invalid_spec_is_rejected() {
    let spec = CharacterSpec {
        name: " A ".into(),
        gender: Gender::Female,
        sexual_orientation: SexualOrientation::Heterosexual,
        country_key: "sweden".into(),
        personality_traits: vec![PersonalityTrait::Social],
        life_values: vec![],
    };
    assert!(spec.validate().is_err());
}

#[test]
fn test_full_life_is_reproducible() {
    let config = SimulationConfig::default();
    let play = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let spec = CharacterSpec {
            name: "Sky".into(),
            gender: Gender::Male,
            sexual_orientation: SexualOrientation::Homosexual,
            country_key: "germany".into(),
            personality_traits: vec![PersonalityTrait::Nurturing, PersonalityTrait::Social],
            life_values: vec![LifeValue::Family],
        };
        let character = spec.build(&config, &mut rng);
        let mut driver =
            GameDriver::with_config(initialize_game_state(character, GameMode::Sandbox), config.clone(), seed);
        driver.run_headless(None, |_, event| event.choices.len() - 1);
        driver.into_state()
    };

    let a = play(77);
    let b = play(77);
    assert!(a.game_over);
    assert_eq!(a.character.age, b.character.age);
    assert_eq!(a.character.stats, b.character.stats);
    assert_eq!(
        a.decisions.iter().map(|d| &d.event_type).collect::<Vec<_>>(),
        b.decisions.iter().map(|d| &d.event_type).collect::<Vec<_>>()
    );
}

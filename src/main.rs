//! Life Sim - headless driver
//!
//! Creates a character from the command line, plays a full life with a
//! simple choice policy, and prints a summary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::runtime::Runtime;

use life_sim::character::CharacterSpec;
use life_sim::core::config::{config, set_config, SimulationConfig};
use life_sim::core::error::{LifeSimError, Result};
use life_sim::core::types::{GameMode, Gender, LifeValue, PersonalityTrait, SexualOrientation};
use life_sim::engine::{initialize_game_state, GameDriver, GameState};
use life_sim::events::LifeEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChoicePolicy {
    /// Always take the first choice
    First,
    /// Pick uniformly at random
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "life_sim")]
#[command(about = "Simulate a life, one year at a time")]
struct Args {
    #[arg(long, default_value = "Alex")]
    name: String,

    #[arg(long, default_value = "female")]
    gender: Gender,

    #[arg(long, default_value = "heterosexual")]
    orientation: SexualOrientation,

    /// Country key (custom, sweden, usa, japan, germany)
    #[arg(long, default_value = "usa")]
    country: String,

    /// Personality trait, repeat for up to three
    #[arg(long = "trait", default_value = "ambitious")]
    traits: Vec<PersonalityTrait>,

    /// Life value, repeat for up to three
    #[arg(long = "value")]
    values: Vec<LifeValue>,

    /// RNG seed for a reproducible life
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many years even if the game is not over
    #[arg(long)]
    max_years: Option<u32>,

    #[arg(long, value_enum, default_value_t = ChoicePolicy::First)]
    policy: ChoicePolicy,

    /// TOML file overriding simulation tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the final game state as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Tick on the wall clock instead of as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("life_sim=info")
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = SimulationConfig::load(path)?;
        set_config(loaded)
            .map_err(|_| LifeSimError::Config("config already initialized".into()))?;
        tracing::info!(path = %path.display(), "loaded config");
    }

    let spec = CharacterSpec {
        name: args.name.clone(),
        gender: args.gender,
        sexual_orientation: args.orientation,
        country_key: args.country.clone(),
        personality_traits: args.traits.clone(),
        life_values: args.values.clone(),
    };
    spec.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let character = spec.build(config(), &mut rng);
    tracing::info!(
        name = %character.name,
        country = %character.country.name,
        "starting life"
    );

    let state = initialize_game_state(character, GameMode::Sandbox);
    let mut driver = GameDriver::new(state, args.seed);

    let policy = args.policy;
    let chooser = move |_: &GameState, event: &LifeEvent| match policy {
        ChoicePolicy::First => 0,
        ChoicePolicy::Random => rng.gen_range(0..event.choices.len()),
    };

    let years = if args.realtime {
        let rt = Runtime::new()?;
        rt.block_on(driver.run(args.max_years, chooser))
    } else {
        driver.run_headless(args.max_years, chooser)
    };

    print_summary(driver.state(), years);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(driver.state())?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote final state");
    }

    Ok(())
}

fn print_summary(state: &GameState, years: u32) {
    let c = &state.character;
    println!("\n=== LIFE SUMMARY ===");
    println!("{} ({}, {})", c.name, c.gender, c.country.name);
    println!("Years simulated: {}", years);
    println!("Age: {}  Year: {}", c.age, state.current_year);
    println!(
        "Status: {}  Education: {}  Children: {}",
        c.relationship_status,
        c.education_level,
        c.children.len()
    );
    println!(
        "Health {:.1}  Happiness {:.1}  Finances {:.1}  Stress {:.1}  Fertility {:.1}",
        c.stats.health, c.stats.happiness, c.stats.finances, c.stats.stress, c.stats.fertility
    );
    println!("Decisions made: {}", state.decisions.len());
    println!("Economic events: {}", state.economic_events.len());
    for achievement in &state.achievements {
        println!("Achievement: {} ({})", achievement.title, achievement.category);
    }
    if state.game_over {
        println!("Game over.");
    }
}

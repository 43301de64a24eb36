//! Life events: catalog, life-stage pools and weighted selection

pub mod catalog;
pub mod life_stage;
pub mod selection;
pub mod types;

pub use catalog::{create_event, create_event_by_key, EventKind};
pub use life_stage::{eligible_events, is_eligible, LifeStage};
pub use selection::{event_weight, roulette, select_event, weighted_candidates};
pub use types::{Category, Choice, LifeEvent, Priority, Transition};

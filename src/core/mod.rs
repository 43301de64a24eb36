pub mod macros;

pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, SimulationConfig};
pub use error::{LifeSimError, Result};

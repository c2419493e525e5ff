pub mod config;
pub mod cs;
pub mod error;
pub mod input;
pub mod logger;

pub use config::SweepConfig;
pub use cs::hashing;
pub use cs::hashing::{
    h1, h2, h3, simulate, CapacityReport, CharPolicy, HashFunction, SimulationResult, Simulator,
};
pub use error::{Error, Result};

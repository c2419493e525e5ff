//! Name hashing and collision simulation.
//!
//! This module provides:
//! - Three name hash functions (additive, positional base 26, Rabin-Karp style base 31)
//! - A modular polynomial accumulator shared by the positional hashes
//! - A fixed-capacity linear probing table
//! - A simulator that counts collisions and probes per (capacity, hash function) run
//!
//! # Examples
//!
//! ```rust
//! use hashsim::{HashFunction, Simulator};
//!
//! let keys = ["SMITH", "JONES", "SMITH"];
//! let report = Simulator::new().run_all(&keys, 10);
//! // The duplicate always collides.
//! for hash in HashFunction::ALL {
//!     assert!(report.result(hash).unwrap().collisions >= 1);
//! }
//! ```

pub mod name_hash;
pub mod open_addressing;
pub mod polynomial_rolling;
pub mod report;
pub mod simulator;

pub use name_hash::{h1, h2, h2_with_policy, h3, CharPolicy, HashFunction};
pub use open_addressing::{Placement, ProbingTable};
pub use polynomial_rolling::{PolyHashBuilder, PolynomialRollingHash};
pub use report::{CapacityReport, ReportDisplay};
pub use simulator::{simulate, SimulationResult, Simulator};

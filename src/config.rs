//! Sweep configuration: which table capacities to try and how to run them.
//!
//! Capacities are either listed explicitly or derived from the key count with a set
//! of multipliers. The defaults (x1, x2, x5, x10, x100) range from a completely full
//! table down to a load factor of 0.01.

use log::info;

use crate::cs::hashing::{CapacityReport, CharPolicy, Simulator};
use crate::error::{Error, Result};

/// Default capacity multipliers, applied to the number of keys.
pub const DEFAULT_MULTIPLIERS: [usize; 5] = [1, 2, 5, 10, 100];

/// A builder-style description of one capacity sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    multipliers: Vec<usize>,
    capacities: Vec<usize>,
    parallel: bool,
    char_policy: CharPolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            capacities: Vec::new(),
            parallel: false,
            char_policy: CharPolicy::default(),
        }
    }
}

impl SweepConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the capacity multipliers.
    pub fn with_multipliers<I: IntoIterator<Item = usize>>(mut self, multipliers: I) -> Self {
        self.multipliers = multipliers.into_iter().collect();
        self
    }

    /// Uses these capacities as given. When non-empty they take precedence over multipliers.
    pub fn with_capacities<I: IntoIterator<Item = usize>>(mut self, capacities: I) -> Self {
        self.capacities = capacities.into_iter().collect();
        self
    }

    /// Runs the capacity x hash function cross product on rayon's pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_char_policy(mut self, policy: CharPolicy) -> Self {
        self.char_policy = policy;
        self
    }

    pub fn multipliers(&self) -> &[usize] {
        &self.multipliers
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn char_policy(&self) -> CharPolicy {
        self.char_policy
    }

    /// Resolves the capacities to simulate for `key_count` keys.
    ///
    /// # Errors
    /// `InvalidCapacity` for a zero capacity, a zero multiplier, multipliers applied to
    /// an empty key list, no capacities at all, or a product that overflows `usize`.
    pub fn capacities(&self, key_count: usize) -> Result<Vec<usize>> {
        if !self.capacities.is_empty() {
            if self.capacities.contains(&0) {
                return Err(Error::invalid_capacity("explicit capacities must be at least 1"));
            }
            return Ok(self.capacities.clone());
        }

        if self.multipliers.is_empty() {
            return Err(Error::invalid_capacity("no capacities or multipliers configured"));
        }
        if key_count == 0 {
            return Err(Error::invalid_capacity(
                "cannot derive capacities from an empty key list",
            ));
        }

        self.multipliers
            .iter()
            .map(|&m| {
                if m == 0 {
                    return Err(Error::invalid_capacity("capacity multiplier must be at least 1"));
                }
                key_count.checked_mul(m).ok_or_else(|| {
                    Error::invalid_capacity(format!(
                        "{} keys x {} overflows the capacity range",
                        key_count, m
                    ))
                })
            })
            .collect()
    }

    pub fn simulator(&self) -> Simulator {
        Simulator::new().with_char_policy(self.char_policy)
    }

    /// Resolves capacities for `keys` and sweeps them.
    pub fn run<K: AsRef<str> + Sync>(&self, keys: &[K]) -> Result<Vec<CapacityReport>> {
        let capacities = self.capacities(keys.len())?;
        info!("capacities for {} keys: {:?}", keys.len(), capacities);
        Ok(self.simulator().sweep(keys, &capacities, self.parallel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::hashing::HashFunction;

    #[test]
    fn test_default_multipliers() {
        let config = SweepConfig::new();
        assert_eq!(
            config.capacities(798).unwrap(),
            vec![798, 1596, 3990, 7980, 79800]
        );
        assert!(!config.parallel());
        assert_eq!(config.char_policy(), CharPolicy::Normalized);
    }

    #[test]
    fn test_explicit_capacities_win() {
        let config = SweepConfig::new()
            .with_multipliers([3])
            .with_capacities([7, 11]);
        assert_eq!(config.capacities(100).unwrap(), vec![7, 11]);
        // Explicit capacities do not need a key count.
        assert_eq!(config.capacities(0).unwrap(), vec![7, 11]);
    }

    #[test]
    fn test_invalid_configurations() {
        let zero_cap = SweepConfig::new().with_capacities([5, 0]);
        assert!(matches!(zero_cap.capacities(3), Err(Error::InvalidCapacity(_))));

        let zero_mul = SweepConfig::new().with_multipliers([1, 0]);
        assert!(matches!(zero_mul.capacities(3), Err(Error::InvalidCapacity(_))));

        let none = SweepConfig::new().with_multipliers(Vec::new());
        assert!(matches!(none.capacities(3), Err(Error::InvalidCapacity(_))));

        assert!(matches!(
            SweepConfig::new().capacities(0),
            Err(Error::InvalidCapacity(_))
        ));

        let overflow = SweepConfig::new().with_multipliers([usize::MAX]);
        assert!(matches!(overflow.capacities(2), Err(Error::InvalidCapacity(_))));
    }

    #[test]
    fn test_run_sweeps_every_capacity() {
        let keys = ["A", "B", "C"];
        let reports = SweepConfig::new()
            .with_multipliers([1, 2])
            .with_parallel(true)
            .run(&keys)
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].capacity(), 3);
        assert_eq!(reports[1].capacity(), 6);
        assert_eq!(reports[0].result(HashFunction::H1).unwrap().as_tuple(), (0, 0));
    }

    #[test]
    fn test_raw_policy_reaches_simulator() {
        let config = SweepConfig::new().with_char_policy(CharPolicy::Raw);
        assert_eq!(config.simulator().char_policy(), CharPolicy::Raw);
    }
}

//! # Collision Simulator
//!
//! Inserts an ordered list of keys into a fresh [`ProbingTable`] and counts what linear
//! probing cost: how many keys found their home slot taken (collisions) and how many
//! slots were examined to resolve them (probes).
//!
//! Every `(capacity, hash function)` pair gets its own table, so runs are independent.
//! [`Simulator::sweep`] can fan the cross product out over rayon's thread pool; the
//! keys are only ever borrowed immutably.

use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::cs::hashing::name_hash::{CharPolicy, HashFunction};
use crate::cs::hashing::open_addressing::ProbingTable;
use crate::cs::hashing::report::CapacityReport;
use crate::error::Result;

/// Counters produced by one full insertion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationResult {
    /// Keys whose home slot was occupied when they were inserted.
    pub collisions: u64,
    /// Slots examined after the home slot, summed over all colliding keys.
    pub probes: u64,
}

impl SimulationResult {
    pub fn as_tuple(&self) -> (u64, u64) {
        (self.collisions, self.probes)
    }
}

/// Runs one insertion pass of `keys` into an empty table of `capacity` slots.
///
/// `hash_fn` maps a key and the capacity to a home slot. Any of [`h1`], [`h2`],
/// [`h3`] fits, as does a closure over [`HashFunction`].
///
/// # Errors
/// - `InvalidCapacity` if `capacity` is zero (raised before anything is hashed).
/// - `TableFull` naming the key that could not be placed.
/// - Whatever `hash_fn` returns.
///
/// # Examples
/// ```
/// use hashsim::{h1, simulate};
///
/// let result = simulate(&["A", "A"], 10, h1).unwrap();
/// assert_eq!(result.as_tuple(), (1, 1));
/// ```
///
/// [`h1`]: crate::cs::hashing::name_hash::h1
/// [`h2`]: crate::cs::hashing::name_hash::h2
/// [`h3`]: crate::cs::hashing::name_hash::h3
pub fn simulate<K, F>(keys: &[K], capacity: usize, hash_fn: F) -> Result<SimulationResult>
where
    K: AsRef<str>,
    F: Fn(&str, usize) -> Result<usize>,
{
    let mut table = ProbingTable::with_capacity(capacity)?;
    let mut result = SimulationResult::default();

    for key in keys {
        let key = key.as_ref();
        let home = hash_fn(key, capacity)?;
        let placement = table.insert(key, home)?;
        if placement.collided() {
            result.collisions += 1;
            result.probes += placement.probes;
            trace!(
                "{:?} collided at slot {}, placed at {} after {} probes",
                key,
                placement.home,
                placement.slot,
                placement.probes
            );
        }
    }

    Ok(result)
}

/// Runs the named hash functions against key lists and collects per-capacity reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    char_policy: CharPolicy,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how H2 derives character values.
    pub fn with_char_policy(mut self, policy: CharPolicy) -> Self {
        self.char_policy = policy;
        self
    }

    pub fn char_policy(&self) -> CharPolicy {
        self.char_policy
    }

    /// One pass of `keys` through `hash` at `capacity`.
    /// A `TableFull` error carries the hash function's name.
    pub fn run<K: AsRef<str>>(
        &self,
        keys: &[K],
        capacity: usize,
        hash: HashFunction,
    ) -> Result<SimulationResult> {
        debug!("{}: inserting {} keys at capacity {}", hash, keys.len(), capacity);
        let policy = self.char_policy;
        let outcome = simulate(keys, capacity, |key, cap| hash.hash_with(key, cap, policy))
            .map_err(|e| e.with_hash_label(hash.name()));

        match &outcome {
            Ok(result) => debug!(
                "{}: capacity {} -> {} collisions, {} probes",
                hash, capacity, result.collisions, result.probes
            ),
            Err(e) => warn!("{}: capacity {} failed: {}", hash, capacity, e),
        }
        outcome
    }

    /// Runs all three hash functions at `capacity`. Each run succeeds or fails on its own.
    pub fn run_all<K: AsRef<str>>(&self, keys: &[K], capacity: usize) -> CapacityReport {
        let mut report = CapacityReport::new(capacity, keys.len());
        for hash in HashFunction::ALL {
            report.push(hash, self.run(keys, capacity, hash));
        }
        report
    }

    /// One report per capacity, in the order given.
    ///
    /// With `parallel` the capacity x hash function runs are spread over rayon's pool.
    /// The reports are identical either way.
    pub fn sweep<K>(&self, keys: &[K], capacities: &[usize], parallel: bool) -> Vec<CapacityReport>
    where
        K: AsRef<str> + Sync,
    {
        info!(
            "sweeping {} keys over {} capacities ({})",
            keys.len(),
            capacities.len(),
            if parallel { "parallel" } else { "sequential" }
        );

        if !parallel {
            return capacities
                .iter()
                .map(|&capacity| self.run_all(keys, capacity))
                .collect();
        }

        let jobs: Vec<(usize, HashFunction)> = capacities
            .iter()
            .flat_map(|&capacity| HashFunction::ALL.into_iter().map(move |hash| (capacity, hash)))
            .collect();

        // Indexed parallel collect keeps job order.
        let outcomes: Vec<(usize, HashFunction, Result<SimulationResult>)> = jobs
            .par_iter()
            .map(|&(capacity, hash)| (capacity, hash, self.run(keys, capacity, hash)))
            .collect();

        let mut reports: Vec<CapacityReport> = Vec::with_capacity(capacities.len());
        for (capacity, hash, outcome) in outcomes {
            if hash == HashFunction::ALL[0] {
                reports.push(CapacityReport::new(capacity, keys.len()));
            }
            if let Some(report) = reports.last_mut() {
                report.push(hash, outcome);
            }
        }
        reports
    }
}

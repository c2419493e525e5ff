use std::fmt;

use crate::cs::hashing::name_hash::HashFunction;
use crate::cs::hashing::simulator::SimulationResult;
use crate::error::{Error, Result};

const RULE: &str = "-----------------------------------";

/// Outcome of every hash function at one table capacity.
#[derive(Debug)]
pub struct CapacityReport {
    capacity: usize,
    key_count: usize,
    outcomes: Vec<(HashFunction, Result<SimulationResult>)>,
}

impl CapacityReport {
    pub fn new(capacity: usize, key_count: usize) -> Self {
        Self {
            capacity,
            key_count,
            outcomes: Vec::with_capacity(HashFunction::ALL.len()),
        }
    }

    pub(crate) fn push(&mut self, hash: HashFunction, outcome: Result<SimulationResult>) {
        self.outcomes.push((hash, outcome));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Keys over slots. Zero for a zero capacity.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.key_count as f64 / self.capacity as f64
    }

    pub fn outcomes(&self) -> &[(HashFunction, Result<SimulationResult>)] {
        &self.outcomes
    }

    /// Counters for `hash`, or `None` if it was not run or failed.
    pub fn result(&self, hash: HashFunction) -> Option<SimulationResult> {
        self.outcomes
            .iter()
            .find(|(h, _)| *h == hash)
            .and_then(|(_, outcome)| outcome.as_ref().ok().copied())
    }

    pub fn failures(&self) -> impl Iterator<Item = (HashFunction, &Error)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(h, outcome)| outcome.as_ref().err().map(|e| (*h, e)))
    }

    /// True when all three hash functions ran successfully.
    pub fn is_complete(&self) -> bool {
        HashFunction::ALL.iter().all(|&h| self.result(h).is_some())
    }

    /// `[H1 collisions, H1 probes, H2 collisions, H2 probes, H3 collisions, H3 probes]`,
    /// available only for a complete report.
    pub fn numbers(&self) -> Option<[u64; 6]> {
        let mut out = [0u64; 6];
        for (i, hash) in HashFunction::ALL.iter().enumerate() {
            let result = self.result(*hash)?;
            out[2 * i] = result.collisions;
            out[2 * i + 1] = result.probes;
        }
        Some(out)
    }

    /// Text rendering of the report, naming `source` as the key file.
    pub fn display<'a>(&'a self, source: &'a str) -> ReportDisplay<'a> {
        ReportDisplay {
            report: self,
            source,
        }
    }
}

/// Borrowed view that renders a [`CapacityReport`] as text.
pub struct ReportDisplay<'a> {
    report: &'a CapacityReport,
    source: &'a str,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Hash Table Size: {}", self.report.capacity)?;
        writeln!(f, "File: {}", self.source)?;
        writeln!(f, "{}", RULE)?;
        for (hash, outcome) in &self.report.outcomes {
            match outcome {
                Ok(result) => {
                    writeln!(f, "{} Collisions: {}", hash, result.collisions)?;
                    writeln!(f, "{} Probes:     {}", hash, result.probes)?;
                }
                Err(e) => writeln!(f, "{} Failed:     {}", hash, e)?,
            }
        }
        Ok(())
    }
}

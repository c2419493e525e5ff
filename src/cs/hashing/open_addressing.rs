//! # Linear Probing Table
//!
//! A fixed-capacity open addressing table used for one simulation run. It never grows,
//! never deletes, and only records which key sits in which slot. Its job is to report
//! how far each key had to travel from its home slot.
//!
//! Probe counting: every slot examined after the home slot, including the one finally
//! taken, counts as one probe. A key whose home slot is free costs zero probes.
//! Probing is bounded by the capacity; once every slot has been examined the insert
//! fails with [`Error::TableFull`] instead of spinning.

use crate::error::{Error, Result};

/// Placeholder hash label for a table-full error raised before the simulator names the function.
const UNLABELLED_HASH: &str = "hash";

/// A slot is either `Empty` or holds a borrowed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Slot<'k> {
    #[default]
    Empty,
    Occupied(&'k str),
}

/// Where a key ended up and what it cost to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Slot the hash function chose.
    pub home: usize,
    /// Slot the key was stored in.
    pub slot: usize,
    /// Slots examined after `home`, including `slot`. Zero when the home slot was free.
    pub probes: u64,
}

impl Placement {
    /// True if the home slot was already occupied.
    pub fn collided(&self) -> bool {
        self.probes > 0
    }
}

/// Fixed-size linear probing table over borrowed keys.
#[derive(Debug, Clone)]
pub struct ProbingTable<'k> {
    slots: Vec<Slot<'k>>,
    len: usize,
}

impl<'k> ProbingTable<'k> {
    /// Creates an empty table of `capacity` slots. A zero capacity is a domain error.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_capacity(
                "table capacity must be at least 1, got 0",
            ));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Default::default);
        Ok(Self { slots, len: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Occupied slots over capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// The key stored in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&'k str> {
        match self.slots.get(slot) {
            Some(Slot::Occupied(key)) => Some(*key),
            _ => None,
        }
    }

    /// Iterates `(slot, key)` over occupied slots in slot order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &'k str)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied(key) => Some((i, *key)),
            Slot::Empty => None,
        })
    }

    /// Places `key`, starting at `home` and walking forward (wrapping) past occupied slots.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `home` is outside the table.
    /// - `TableFull` if `capacity` probe steps find no empty slot.
    pub fn insert(&mut self, key: &'k str, home: usize) -> Result<Placement> {
        let capacity = self.slots.len();
        if home >= capacity {
            return Err(Error::invalid_capacity(format!(
                "home slot {} is outside a table of capacity {}",
                home, capacity
            )));
        }

        if self.slots[home] == Slot::Empty {
            self.occupy(home, key);
            return Ok(Placement {
                home,
                slot: home,
                probes: 0,
            });
        }

        let mut idx = home;
        for step in 1..=capacity as u64 {
            idx = (idx + 1) % capacity;
            if self.slots[idx] == Slot::Empty {
                self.occupy(idx, key);
                return Ok(Placement {
                    home,
                    slot: idx,
                    probes: step,
                });
            }
        }

        Err(Error::TableFull {
            capacity,
            hash: UNLABELLED_HASH.to_string(),
            key: key.to_string(),
        })
    }

    fn occupy(&mut self, idx: usize, key: &'k str) {
        self.slots[idx] = Slot::Occupied(key);
        self.len += 1;
    }
}

//! Persistence contract for player progress.
//!
//! The engine only ever needs three keys per player: the highest unlocked
//! level, the best move count per level, and whether the solution replay has
//! been purchased for a level. Writes are fire-and-forget; a store that drops
//! them costs the player progress, never correctness.

use alloc::collections::{BTreeMap, BTreeSet};

/// Key/value progress storage implemented by the embedding application.
pub trait ProgressStore {
    /// Highest unlocked level index (0-based). Fresh profiles return 0.
    fn highest_unlocked(&self) -> usize;

    fn set_highest_unlocked(&mut self, index: usize);

    /// Best (lowest) recorded manual move count for a level, if any.
    fn best_moves(&self, level: usize) -> Option<u32>;

    fn set_best_moves(&mut self, level: usize, count: u32);

    /// Whether solution replay has been granted for a level.
    fn solution_entitlement(&self, level: usize) -> bool;

    fn set_solution_entitlement(&mut self, level: usize, granted: bool);
}

/// In-memory reference store, used by tests and the simulation binary.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    highest_unlocked: usize,
    best_moves: BTreeMap<usize, u32>,
    entitlements: BTreeSet<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn highest_unlocked(&self) -> usize {
        self.highest_unlocked
    }

    fn set_highest_unlocked(&mut self, index: usize) {
        self.highest_unlocked = index;
    }

    fn best_moves(&self, level: usize) -> Option<u32> {
        self.best_moves.get(&level).copied()
    }

    fn set_best_moves(&mut self, level: usize, count: u32) {
        self.best_moves.insert(level, count);
    }

    fn solution_entitlement(&self, level: usize) -> bool {
        self.entitlements.contains(&level)
    }

    fn set_solution_entitlement(&mut self, level: usize, granted: bool) {
        if granted {
            self.entitlements.insert(level);
        } else {
            self.entitlements.remove(&level);
        }
    }
}

/// Serializable snapshot of a [`MemoryStore`], for embedding applications that
/// sync progress as one blob.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSnapshot {
    pub highest_unlocked: usize,
    pub best_moves: BTreeMap<usize, u32>,
    pub entitlements: BTreeSet<usize>,
}

impl From<&MemoryStore> for ProgressSnapshot {
    fn from(store: &MemoryStore) -> Self {
        ProgressSnapshot {
            highest_unlocked: store.highest_unlocked,
            best_moves: store.best_moves.clone(),
            entitlements: store.entitlements.clone(),
        }
    }
}

impl From<ProgressSnapshot> for MemoryStore {
    fn from(snapshot: ProgressSnapshot) -> Self {
        MemoryStore {
            highest_unlocked: snapshot.highest_unlocked,
            best_moves: snapshot.best_moves,
            entitlements: snapshot.entitlements,
        }
    }
}

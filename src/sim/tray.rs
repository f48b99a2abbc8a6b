//! The holding tray
//!
//! Picked tiles are appended at the tail. Three equal neighbours form a match
//! run and are removed by a single left-to-right pass that never rewinds.

use serde::{Deserialize, Serialize};

use super::tile::Pattern;
use crate::consts::MATCH_LEN;

/// Bounded sequence of picked tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tray {
    entries: Vec<Pattern>,
    capacity: usize,
}

impl Tray {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a tray holding `entries` (used by tests and replays)
    pub fn with_entries(entries: Vec<Pattern>, capacity: usize) -> Self {
        Self { entries, capacity }
    }

    pub fn entries(&self) -> &[Pattern] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a tile at the tail
    pub fn push(&mut self, pattern: Pattern) {
        self.entries.push(pattern);
    }

    /// True if any three consecutive entries share a pattern
    pub fn has_match(&self) -> bool {
        has_match(&self.entries)
    }

    /// Remove match runs in place; returns how many entries were removed
    pub fn resolve(&mut self) -> usize {
        let before = self.entries.len();
        self.entries = resolve(&self.entries);
        before - self.entries.len()
    }

    /// Length of the run of equal entries at the tail
    pub fn tail_run(&self) -> (Option<Pattern>, usize) {
        let Some(&last) = self.entries.last() else {
            return (None, 0);
        };
        let run = self.entries.iter().rev().take_while(|&&p| p == last).count();
        (Some(last), run)
    }

    /// How many entries of `pattern` the tray holds
    pub fn count_of(&self, pattern: Pattern) -> usize {
        self.entries.iter().filter(|&&p| p == pattern).count()
    }
}

/// True if any three consecutive entries share a pattern
pub fn has_match(entries: &[Pattern]) -> bool {
    entries
        .windows(MATCH_LEN)
        .any(|w| w.iter().all(|&p| p == w[0]))
}

/// Single-pass run removal.
///
/// At each position, if it starts a run of three equal entries those three are
/// dropped and scanning continues right after them; otherwise the entry is
/// kept. Entries already kept are never re-examined, so a run that only forms
/// across a removal point survives the pass.
pub fn resolve(entries: &[Pattern]) -> Vec<Pattern> {
    let mut kept = Vec::with_capacity(entries.len());
    let mut i = 0;
    while i < entries.len() {
        let run = entries.get(i..i + MATCH_LEN);
        match run {
            Some(w) if w.iter().all(|&p| p == w[0]) => i += MATCH_LEN,
            _ => {
                kept.push(entries[i]);
                i += 1;
            }
        }
    }
    kept
}

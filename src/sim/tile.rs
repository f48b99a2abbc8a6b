//! Tiles and blocks
//!
//! A block is a small stack of tiles at a fixed board position. Only the top
//! tile can be picked.

use serde::{Deserialize, Serialize};

/// Matching category of a tile. Tiles with equal patterns are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pattern(pub u8);

impl Pattern {
    /// Zero-based index into the pattern set
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A stack of tiles. Stored bottom to top: the last element is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    tiles: Vec<Pattern>,
}

impl Block {
    /// Build a block from tiles in bottom-to-top order
    pub fn new(tiles: Vec<Pattern>) -> Self {
        Self { tiles }
    }

    /// Pattern of the top tile, if any
    #[inline]
    pub fn peek_top(&self) -> Option<Pattern> {
        self.tiles.last().copied()
    }

    /// Remove and return the top tile
    #[inline]
    pub fn pop_top(&mut self) -> Option<Pattern> {
        self.tiles.pop()
    }

    /// Tiles left in the stack
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True once every tile has been picked
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles bottom to top (for rendering the stacked layers)
    pub fn tiles(&self) -> &[Pattern] {
        &self.tiles
    }
}

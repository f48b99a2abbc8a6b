//! Board generation
//!
//! Every block starts as three copies of one randomly chosen pattern. All
//! tiles are then shuffled together and dealt back out, so blocks end up
//! mixed while each pattern's board total stays a multiple of three.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use super::tile::{Block, Pattern};

/// The blocks of one session, addressed by grid index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    blocks: Vec<Block>,
}

impl Board {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Number of block positions (exhausted ones included)
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when every block is exhausted
    pub fn is_cleared(&self) -> bool {
        self.blocks.iter().all(Block::is_exhausted)
    }

    /// Tiles still on the board
    pub fn remaining_tiles(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Tile count per pattern, indexed by `Pattern::index`
    pub fn pattern_counts(&self, pattern_count: usize) -> Vec<usize> {
        let mut counts = vec![0; pattern_count];
        for pattern in self.blocks.iter().flat_map(|b| b.tiles()) {
            if let Some(c) = counts.get_mut(pattern.index()) {
                *c += 1;
            }
        }
        counts
    }
}

/// Generate a fresh board.
///
/// An empty pattern set yields `block_count` exhausted blocks.
pub fn generate<R: Rng + ?Sized>(
    patterns: &[Pattern],
    block_count: usize,
    tiles_per_block: usize,
    rng: &mut R,
) -> Board {
    if patterns.is_empty() {
        log::warn!("Generating board with no patterns; all blocks start exhausted");
        return Board::new(vec![Block::default(); block_count]);
    }

    let mut all_tiles = Vec::with_capacity(block_count * tiles_per_block);
    for _ in 0..block_count {
        if let Some(&pattern) = patterns.choose(rng) {
            all_tiles.extend(std::iter::repeat_n(pattern, tiles_per_block));
        }
    }
    all_tiles.shuffle(rng);

    let blocks: Vec<Block> = if tiles_per_block == 0 {
        vec![Block::default(); block_count]
    } else {
        all_tiles
            .chunks(tiles_per_block)
            .map(|chunk| Block::new(chunk.to_vec()))
            .collect()
    };

    log::debug!(
        "Generated board: {} blocks, {} tiles",
        blocks.len(),
        all_tiles.len()
    );

    Board::new(blocks)
}

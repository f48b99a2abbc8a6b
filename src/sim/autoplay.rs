//! Demo-mode player
//!
//! Greedy pick choice used by the headless runner and for smoke testing.
//! Not a solver: it only looks one tile ahead.

use super::board::Board;
use super::tray::Tray;

/// Pick the block whose top tile helps the tray most.
///
/// Preference: extend the tray's tail run, then join a pattern already in the
/// tray, then the first block with tiles left. `None` once the board is clear.
pub fn choose_block(board: &Board, tray: &Tray) -> Option<usize> {
    let (tail, run) = tray.tail_run();

    board
        .blocks()
        .iter()
        .enumerate()
        .filter_map(|(i, block)| block.peek_top().map(|p| (i, p)))
        .max_by_key(|&(i, pattern)| {
            let extends_tail = if Some(pattern) == tail { run } else { 0 };
            let in_tray = tray.count_of(pattern);
            // Earlier index wins ties
            (extends_tail, in_tray, std::cmp::Reverse(i))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Block, Pattern};

    const A: Pattern = Pattern(0);
    const B: Pattern = Pattern(1);
    const C: Pattern = Pattern(2);

    #[test]
    fn test_prefers_tail_run() {
        let board = Board::new(vec![
            Block::new(vec![A]),
            Block::new(vec![C]),
            Block::new(vec![B]),
        ]);
        let tray = Tray::with_entries(vec![A, B, B], 7);
        assert_eq!(choose_block(&board, &tray), Some(2));
    }

    #[test]
    fn test_prefers_pattern_in_tray() {
        let board = Board::new(vec![Block::new(vec![C]), Block::new(vec![A])]);
        let tray = Tray::with_entries(vec![A, B], 7);
        assert_eq!(choose_block(&board, &tray), Some(1));
    }

    #[test]
    fn test_first_available_on_empty_tray() {
        let board = Board::new(vec![Block::default(), Block::new(vec![B]), Block::new(vec![C])]);
        assert_eq!(choose_block(&board, &Tray::new(7)), Some(1));
    }

    #[test]
    fn test_none_when_cleared() {
        let board = Board::new(vec![Block::default(); 3]);
        assert_eq!(choose_block(&board, &Tray::new(7)), None);
    }
}

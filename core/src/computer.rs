//! Move policy for the computer player.
//!
//! Placement avoids any tile player one could punish on the first move. In play, the first winning destination in
//! scan order is taken, otherwise a legal destination is picked at random.

use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

pub(crate) fn choose_start<R: Rng + ?Sized>(
    board: &Board,
    first: TileIndex,
    rng: &mut R,
) -> Result<TileIndex> {
    let valid: Vec<TileIndex> = (0..board.total_tiles())
        .filter(|&position| is_valid_start_space(board, first, position))
        .collect();
    let safe: Vec<TileIndex> = valid
        .iter()
        .copied()
        .filter(|&position| is_safe_start_color(board, first, position))
        .collect();

    let candidates = if safe.is_empty() {
        if !valid.is_empty() {
            log::warn!(
                "No start space is safe from player one at {}, ignoring colors",
                first
            );
        }
        valid
    } else {
        safe
    };

    candidates
        .choose(rng)
        .copied()
        .ok_or(GameError::NoStartSpace)
}

pub(crate) fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    from: TileIndex,
    opponent_at: TileIndex,
    rng: &mut R,
) -> Option<TileIndex> {
    let moves = board.legal_moves(from);

    let winning = moves
        .iter()
        .copied()
        .find(|&to| win_reason(board, to, opponent_at, from).is_some());
    if winning.is_some() {
        return winning;
    }

    moves.as_slice().choose(rng).copied()
}

//! Random playouts.
//!
//! Fills random empty cells for alternating players until one of them
//! connects. Hex has no draws, so a playout from any unfinished position
//! ends with a winner before the board is full.

use crate::board::{Player, Point};
use crate::game::{Game, Status};

/// Outcome of a playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    pub winner: Player,
    /// Stones placed by the playout itself.
    pub moves: usize,
}

/// Play random moves on `game` until it is won.
///
/// Returns `None` only if the game is already over.
pub fn random_playout(game: &mut Game, rng: &mut fastrand::Rng) -> Option<Playout> {
    if game.board().is_finished() {
        return None;
    }
    let mut empty: Vec<Point> = game.board().empty_points().collect();
    rng.shuffle(&mut empty);

    let mut moves = 0;
    for (q, r) in empty {
        let Some(placement) = game.play(q, r) else {
            continue;
        };
        moves += 1;
        if let Status::Won(winner) = placement.status {
            log::debug!("playout won by {winner} after {moves} moves");
            return Some(Playout { winner, moves });
        }
    }
    // Unreachable on a hex board: a full board always has a winner.
    game.winner().map(|winner| Playout { winner, moves })
}

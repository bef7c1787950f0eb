//! Turn controller.
//!
//! [`Game`] owns the board for one session and runs every accepted
//! placement through the win check: a win ends the game, anything else
//! hands the move to the opponent. Stray inputs (occupied cell, out of
//! turn, after the game is over) are ignored rather than reported as errors.

use crate::board::{Board, Player, Point};
use crate::connectivity::{has_won, winning_path};

/// Where the game stands after a placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The game continues with this player to move.
    Ongoing(Player),
    /// This player has connected their edges.
    Won(Player),
}

/// An accepted placement: which cell changed, to whom, and the resulting status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub player: Player,
    pub status: Status,
}

/// One game session.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        let current = self.board.current_player();
        if self.board.is_finished() {
            // The winner's turn is never advanced past.
            Status::Won(current)
        } else {
            Status::Ongoing(current)
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status() {
            Status::Won(p) => Some(p),
            Status::Ongoing(_) => None,
        }
    }

    /// The chain that won the game, if it is over.
    pub fn winning_path(&self) -> Option<Vec<Point>> {
        self.winner().and_then(|p| winning_path(&self.board, p))
    }

    /// Place a stone for the player to move.
    pub fn play(&mut self, q: usize, r: usize) -> Option<Placement> {
        let player = self.board.current_player();
        self.place(q, r, player)
    }

    /// Place a stone for `player`, returning `None` if the input is ignored.
    pub fn place(&mut self, q: usize, r: usize, player: Player) -> Option<Placement> {
        if !self.board.place_stone(q, r, player) {
            log::trace!("ignored {player} at ({q}, {r})");
            return None;
        }
        log::debug!("{player} placed at ({q}, {r})");

        let status = if has_won(&self.board, player) {
            self.board.finish();
            log::info!("{player} wins after {} stones", self.board.stones());
            Status::Won(player)
        } else {
            self.board.advance_turn();
            Status::Ongoing(self.board.current_player())
        };
        Some(Placement {
            point: (q, r),
            player,
            status,
        })
    }

    /// Discard the board and start over with Red to move.
    pub fn new_game(&mut self) {
        self.board.reset();
        log::info!("new game");
    }
}

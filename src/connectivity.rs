//! Win detection.
//!
//! A player has won when a chain of their stones, each hexagonally adjacent
//! to the next, joins their two edges:
//! - Red: column `q = 0` to column `q = N - 1`
//! - Yellow: row `r = 0` to row `r = N - 1`
//!
//! The search is a breadth-first flood from every owned cell on the start
//! edge, restricted to same-player neighbors, that stops at the first
//! visited cell on the target edge.

use std::collections::VecDeque;

use crate::board::{Board, Player, Point};
use crate::constants::{CELLS, N};

/// Sentinel for "no parent" in the BFS tree (seed cells).
const NO_PARENT: usize = usize::MAX;

/// Cells of `player`'s start edge.
fn start_edge(player: Player) -> impl Iterator<Item = Point> {
    (0..N).map(move |i| match player {
        Player::Red => (0, i),
        Player::Yellow => (i, 0),
    })
}

#[inline]
fn on_target_edge(player: Player, (q, r): Point) -> bool {
    match player {
        Player::Red => q == N - 1,
        Player::Yellow => r == N - 1,
    }
}

/// Breadth-first search from the start edge.
///
/// Returns the first target-edge cell reached together with the parent
/// links of the search tree, or `None` if the target edge is unreachable.
fn search(board: &Board, player: Player) -> Option<(Point, [usize; CELLS])> {
    let mut visited = [false; CELLS];
    let mut parent = [NO_PARENT; CELLS];
    let mut queue: VecDeque<Point> = VecDeque::with_capacity(CELLS);

    for (q, r) in start_edge(player) {
        if board.get(q, r) == Some(player) {
            visited[Board::idx(q, r)] = true;
            queue.push_back((q, r));
        }
    }

    while let Some((q, r)) = queue.pop_front() {
        debug_assert!(Board::in_bounds(q, r));
        if on_target_edge(player, (q, r)) {
            return Some(((q, r), parent));
        }
        for (nq, nr) in Board::neighbors(q, r) {
            let ni = Board::idx(nq, nr);
            if !visited[ni] && board.get(nq, nr) == Some(player) {
                visited[ni] = true;
                parent[ni] = Board::idx(q, r);
                queue.push_back((nq, nr));
            }
        }
    }
    None
}

/// Whether `player`'s stones connect their two edges.
pub fn has_won(board: &Board, player: Player) -> bool {
    search(board, player).is_some()
}

/// A connecting chain of `player`'s stones, ordered from the start edge to
/// the target edge, or `None` if the player has not won.
///
/// The chain is a shortest one among those ending at the first target cell
/// the search reaches; consecutive cells are always hex neighbors.
pub fn winning_path(board: &Board, player: Player) -> Option<Vec<Point>> {
    let ((q, r), parent) = search(board, player)?;
    let mut path = vec![(q, r)];
    let mut i = Board::idx(q, r);
    while parent[i] != NO_PARENT {
        i = parent[i];
        path.push((i % N, i / N));
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    /// Lay down stones directly, ignoring turn order.
    fn board_with(red: &[Point], yellow: &[Point]) -> Board {
        let mut board = Board::new();
        for &(q, r) in red {
            if board.current_player() != Player::Red {
                board.advance_turn();
            }
            assert!(board.place_stone(q, r, Player::Red));
        }
        for &(q, r) in yellow {
            if board.current_player() != Player::Yellow {
                board.advance_turn();
            }
            assert!(board.place_stone(q, r, Player::Yellow));
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Red));
        assert!(!has_won(&board, Player::Yellow));
        assert_eq!(winning_path(&board, Player::Red), None);
    }

    #[test]
    fn test_straight_row_wins_for_red() {
        let row: Vec<Point> = (0..N).map(|q| (q, 5 % N)).collect();
        let board = board_with(&row, &[]);
        assert!(has_won(&board, Player::Red));
        assert!(!has_won(&board, Player::Yellow));
        assert_eq!(winning_path(&board, Player::Red), Some(row));
    }

    #[test]
    fn test_straight_column_wins_for_yellow() {
        let col: Vec<Point> = (0..N).map(|r| (3, r)).collect();
        let board = board_with(&[], &col);
        assert!(has_won(&board, Player::Yellow));
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_gap_breaks_connection() {
        let row: Vec<Point> = (0..N).filter(|&q| q != N / 2).map(|q| (q, 2)).collect();
        let board = board_with(&row, &[]);
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_non_hex_diagonal_does_not_connect() {
        // (q, r) -> (q + 1, r + 1) is not a hex neighbor
        let diagonal: Vec<Point> = (0..N).map(|i| (i, i)).collect();
        let board = board_with(&diagonal, &[]);
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_anti_diagonal_connects() {
        // (q, r) -> (q + 1, r - 1) is a hex neighbor
        let anti: Vec<Point> = (0..N).map(|i| (i, N - 1 - i)).collect();
        let board = board_with(&anti, &[]);
        assert!(has_won(&board, Player::Red));
        let other: Vec<Point> = (0..N).map(|i| (N - 1 - i, i)).collect();
        let board = board_with(&[], &other);
        assert!(has_won(&board, Player::Yellow));
    }

    #[test]
    fn test_opponent_stones_do_not_connect() {
        let mut red: Vec<Point> = (0..N).map(|q| (q, 4)).collect();
        let gap = red.remove(N / 2);
        let board = board_with(&red, &[gap]);
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_winding_path() {
        // Down column 1, across row N-1, up column N-2, then out to the edge
        let mut red: Vec<Point> = vec![(0, 0)];
        red.extend((0..N).map(|r| (1, r)));
        red.extend((2..N - 2).map(|q| (q, N - 1)));
        red.extend((0..N).map(|r| (N - 2, r)));
        red.push((N - 1, 0));
        red.sort();
        red.dedup();
        let board = board_with(&red, &[]);
        let path = winning_path(&board, Player::Red).expect("winding chain connects");
        assert_eq!(path.first().map(|p| p.0), Some(0));
        assert_eq!(path.last().map(|p| p.0), Some(N - 1));
        for w in path.windows(2) {
            assert!(Board::neighbors(w[0].0, w[0].1).any(|n| n == w[1]));
            assert_eq!(board.get(w[1].0, w[1].1), Some(Player::Red));
        }
    }

    #[test]
    fn test_idempotent() {
        let mut game = Game::new();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..N * 3 {
            let empty: Vec<Point> = game.board().empty_points().collect();
            let (q, r) = empty[rng.usize(..empty.len())];
            game.play(q, r);
        }
        let board = game.board();
        for player in [Player::Red, Player::Yellow] {
            assert_eq!(has_won(board, player), has_won(board, player));
            assert_eq!(winning_path(board, player), winning_path(board, player));
        }
    }
}

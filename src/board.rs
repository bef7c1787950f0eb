//! Board state: cell occupancy and turn bookkeeping.
//!
//! Cells are addressed with axial `(q, r)` coordinates over an `N`x`N`
//! rhombus. `q` is the column, `r` the row. Each cell has up to six
//! neighbors (see [`DIRECTIONS`]).

use std::fmt;

use crate::constants::{CELLS, COLUMNS, DIRECTIONS, N};

/// A cell on the board as an axial `(q, r)` pair.
pub type Point = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first and connects the `q = 0` and `q = N - 1` columns.
    Red,
    /// Connects the `r = 0` and `r = N - 1` rows.
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Lowercase name used by the text front-end.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The board in play: occupancy, whose turn it is, and whether the game is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELLS],
    current: Player,
    finished: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            current: Player::Red,
            finished: false,
        }
    }

    #[inline]
    pub fn in_bounds(q: usize, r: usize) -> bool {
        q < N && r < N
    }

    #[inline]
    pub(crate) fn idx(q: usize, r: usize) -> usize {
        r * N + q
    }

    /// Occupant of `(q, r)`, or `None` if the cell is empty or off the board.
    pub fn get(&self, q: usize, r: usize) -> Option<Player> {
        if !Self::in_bounds(q, r) {
            return None;
        }
        self.cells[Self::idx(q, r)]
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of stones on the board.
    pub fn stones(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// In-bounds hex neighbors of `(q, r)`.
    pub fn neighbors(q: usize, r: usize) -> impl Iterator<Item = Point> {
        DIRECTIONS.into_iter().filter_map(move |(dq, dr)| {
            let nq = q.checked_add_signed(dq)?;
            let nr = r.checked_add_signed(dr)?;
            Self::in_bounds(nq, nr).then_some((nq, nr))
        })
    }

    /// Empty cells in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..N)
            .flat_map(|r| (0..N).map(move |q| (q, r)))
            .filter(|&(q, r)| self.cells[Self::idx(q, r)].is_none())
    }

    /// Put `player`'s stone on `(q, r)`.
    ///
    /// Returns `false` without touching the board if the cell is off the
    /// board or occupied, if it is not `player`'s turn, or if the game is
    /// already over. Turn advancement is left to the caller.
    pub fn place_stone(&mut self, q: usize, r: usize, player: Player) -> bool {
        if self.finished || player != self.current {
            return false;
        }
        if !Self::in_bounds(q, r) {
            return false;
        }
        let i = Self::idx(q, r);
        if self.cells[i].is_some() {
            return false;
        }
        self.cells[i] = Some(player);
        true
    }

    /// Clear every cell and hand the first move back to Red.
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
        self.current = Player::Red;
        self.finished = false;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.opponent();
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

/// Format a point in `a1` notation: column letter for `q`, 1-based row for `r`.
pub fn str_coord((q, r): Point) -> String {
    format!("{}{}", COLUMNS[q] as char, r + 1)
}

/// Parse `a1`-style notation (case-insensitive). Returns `None` if malformed
/// or off the board.
pub fn parse_coord(s: &str) -> Option<Point> {
    let s = s.trim().to_ascii_lowercase();
    let mut chars = s.chars();
    let col = chars.next()?;
    let q = COLUMNS.iter().position(|&c| c as char == col)?;
    let r = chars.as_str().parse::<usize>().ok()?.checked_sub(1)?;
    Board::in_bounds(q, r).then_some((q, r))
}

/// Rows are indented one step per row so the rhombus reads as a hex grid.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for q in 0..N {
            write!(f, "{} ", COLUMNS[q] as char)?;
        }
        writeln!(f)?;
        for r in 0..N {
            write!(f, "{:>2} {}", r + 1, " ".repeat(r))?;
            for q in 0..N {
                let ch = match self.get(q, r) {
                    Some(Player::Red) => 'R',
                    Some(Player::Yellow) => 'Y',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

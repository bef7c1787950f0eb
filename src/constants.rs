//! Board dimensions and hex geometry.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board11x11` (default): 11x11 board
//! - `board9x9`: 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                                # 11x11 (default)
//! cargo build --no-default-features --features board13x13   # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the rhombus board.
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board11x11")]
pub const N: usize = 11;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(any(
    all(feature = "board9x9", feature = "board11x11"),
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board11x11", feature = "board13x13"),
))]
compile_error!("Enable only one of 'board9x9', 'board11x11' or 'board13x13'");

#[cfg(not(any(feature = "board9x9", feature = "board11x11", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board11x11' or 'board13x13'");

/// Number of cells on the board.
pub const CELLS: usize = N * N;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Axial `(dq, dr)` offsets to the six neighbors of a hex cell.
/// Order: East, West, South, North, North-East, South-West
pub const DIRECTIONS: [(isize, isize); 6] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, -1), (-1, 1)];

// =============================================================================
// Text Front-End
// =============================================================================

/// Column letters used by the `a1`-style coordinate notation.
pub const COLUMNS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

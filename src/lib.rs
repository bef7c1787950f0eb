//! Hex: a two-player connection game on a rhombus of hexagons.
//!
//! Red connects the left and right columns, Yellow the top and bottom rows.
//! Whoever joins their two edges with an unbroken chain of stones wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and hex geometry
//! - [`board`] - Cell occupancy and turn bookkeeping
//! - [`connectivity`] - Win detection (edge-to-edge search)
//! - [`game`] - Turn controller composing board and win check
//! - [`playout`] - Random playouts
//! - [`shell`] - Text front-end
//!
//! ## Example
//!
//! ```
//! use hex_game::game::{Game, Status};
//! use hex_game::board::Player;
//!
//! let mut game = Game::new();
//! let placement = game.play(0, 5).unwrap();
//! assert_eq!(placement.status, Status::Ongoing(Player::Yellow));
//!
//! // Occupied cells are ignored
//! assert!(game.play(0, 5).is_none());
//! ```

pub mod board;
pub mod connectivity;
pub mod constants;
pub mod game;
pub mod playout;
pub mod shell;

//! Single-player minesweeper board engine.
//!
//! The library owns the game rules only: mine placement, adjacency counts,
//! the cascading reveal, flag bookkeeping, and win/loss detection. Rendering
//! and input belong to the caller; `main.rs` is a terminal player built on
//! [`game::Minefield`].

pub mod board;
pub mod cell;
pub mod game;

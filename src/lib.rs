//! # Candy Sort
//!
//! A candy-sorting column puzzle for the terminal. A seeded shuffle deals
//! candies unevenly across a set of bounded columns, then the player moves
//! the top candy of one column onto another until every column holds a
//! single candy type. The same seed always recreates the same game.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: candy alphabet, bounded columns, board,
//!   seeded setup, move engine
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

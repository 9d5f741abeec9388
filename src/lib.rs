//! # Connect Four
//!
//! Console Connect Four for a human against the computer, or for two computer
//! agents against each other.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn states
//! - [`ai`] — Agent trait and the random reference agent
//! - [`engine`] — Move providers and the turn engine that sequences them
//! - [`ui`] — Console rendering, stdin parsing, interactive provider, reporter
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;

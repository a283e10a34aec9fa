//! ghost-shell — a portfolio presented as a simulated terminal session over
//! a generative particle-field background.
//!
//! The crate splits into pure simulation/content modules that never touch
//! the terminal (`field`, `shell`, `content`, `effects`, `canvas`) and one
//! host module (`app`) that owns crossterm setup, the frame loop, and
//! teardown.

pub mod app;
pub mod canvas;
pub mod config;
pub mod content;
pub mod effects;
pub mod field;
pub mod rng;
pub mod shell;
pub mod types;

#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

//! A wheel-and-phrase guessing game.
//!
//! The engines in [`game`] are synchronous state machines; the binary owns
//! the clock and the terminal and feeds them actions.

pub mod cli;
pub mod config;
pub mod errors;
pub mod game;
pub mod logging;
pub mod puzzle;
pub mod random;
pub mod wheel;

pub use errors::Error;

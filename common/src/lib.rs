//! Tic-tac-toe engine: board state, outcome detection and the computer's
//! move selection, plus the logging and config plumbing shared with the
//! text client.

pub mod config;
pub mod games;
pub mod logger;

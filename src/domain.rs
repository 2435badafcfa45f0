//! Domain layer
//!
//! Plain types and rules with no knowledge of the terminal or the runtime:
//! - Views and configuration errors
//! - Passcode buffer and secret
//! - Elapsed-time breakdown
//! - Puzzle board
//! - Timer ids, clocks and randomness
//! - Text wrapping for the letter

pub mod clock;
pub mod elapsed;
pub mod entropy;
pub mod error;
pub mod heart;
pub mod passcode;
pub mod puzzle;
pub mod text;
pub mod timer;
pub mod view;

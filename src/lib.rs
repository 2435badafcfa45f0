//! # Keepsake - a greeting card for the terminal
//!
//! A passcode-gated card with an elapsed-time calendar, a small picture
//! puzzle, a memories slideshow and a letter, built with Ratatui.
//! The library follows an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, one sub-state per panel
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): functions that transform state and return intents
//! - **Command** (`core::cmd`): side effects such as starting or stopping timers
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use keepsake::{
//!     core::msg::{login::LoginMsg, Msg},
//!     update, AppState,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Login(LoginMsg::Append('2')), state);
//!
//! assert_eq!(state.login.filled(), 1);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - plain rules: passcode, elapsed time, puzzle, timers
//! - [`infrastructure`] - terminal, configuration, CLI, scheduler
//! - [`integration`] - runtime and main loop
//! - [`presentation`] - components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

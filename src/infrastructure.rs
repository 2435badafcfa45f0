//! Infrastructure layer
//!
//! This module handles everything outside the pure core:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration files
//! - Timer scheduling on tokio

pub mod cli;
pub mod config;
pub mod scheduler;
pub mod tui;

//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - Runtime owning state, queues and the command executor
//! - Renderer over the presentation components
//! - AppRunner main loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;

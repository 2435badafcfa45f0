//! Presentation layer
//!
//! Stateless components that draw [`crate::core::state::AppState`] and the
//! small widgets they share.

pub mod components;
pub mod widgets;

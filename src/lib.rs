//! Pixel Snake - a grid-based snake with continuous sub-grid movement
//!
//! This library provides:
//! - Core movement and collision logic (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The playable frame loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

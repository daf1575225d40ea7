//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It holds no rules
//! of its own: every action goes through [`crate::GameEngine`].

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::PlaySession;

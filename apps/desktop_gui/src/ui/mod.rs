//! UI layer for the desktop GUI: the eframe app shell and its colour theme.

pub mod app;
pub mod theme;

pub use app::RufixApp;

//! Backend bridge: commands queued by the UI and the worker thread serving them.

pub mod commands;
pub mod runtime;

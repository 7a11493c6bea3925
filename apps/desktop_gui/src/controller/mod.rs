//! Controller layer: UI events, reducer-like state transitions, render functions,
//! and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
pub mod view;

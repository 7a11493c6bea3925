//! UI intents and backend events consumed by the controller reducer.

use client_core::SolverError;
use shared::{
    domain::{Color, Face},
    protocol::{ScrambleResponse, SolveResponse},
};

/// Identifies one backend request so late results can be matched to the
/// in-flight slot that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectColor(Color),
    PaintSquare { face: Face, index: usize },
    Clear,
    Reset,
    Scramble,
    Solve,
    CancelSolve,
    HighlightMove(usize),
}

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    BackendUnavailable(String),
    SolveFinished {
        ticket: Ticket,
        outcome: Result<SolveResponse, SolverError>,
    },
    ScrambleFinished {
        ticket: Ticket,
        outcome: Result<ScrambleResponse, SolverError>,
    },
}

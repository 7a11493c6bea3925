//! Reducer-like state transitions for the cube editor and the solve cycle.
//!
//! [`UiState`] is the single owner of everything the screen shows. Actions and
//! backend events mutate it; rendering reads it through `controller::view`.

use rand::{rngs::StdRng, SeedableRng};
use shared::{
    cube::{CubeState, INVALID_STATE_MESSAGE},
    domain::Color,
    notation::{format_sequence, Move},
};
use tracing::{debug, error, info, warn};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{Ticket, UiAction, UiEvent},
};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    Idle,
    Solving(Ticket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionPanel {
    Hidden,
    Loading,
    AlreadySolved,
    Cancelled,
    Moves {
        moves: Vec<Move>,
        count: usize,
        highlighted: Option<usize>,
    },
    Error(String),
}

pub struct UiState {
    pub cube: CubeState,
    pub selected_color: Color,
    pub solve: SolvePhase,
    pub scramble: Option<Ticket>,
    pub panel: SolutionPanel,
    pub status: String,
    next_ticket: u64,
    rng: StdRng,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            cube: CubeState::solved(),
            selected_color: Color::White,
            solve: SolvePhase::Idle,
            scramble: None,
            panel: SolutionPanel::Hidden,
            status: String::new(),
            next_ticket: 1,
            rng,
        }
    }

    pub fn is_solving(&self) -> bool {
        matches!(self.solve, SolvePhase::Solving(_))
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// Applies a user intent. Returns the backend command it requires, if any.
    ///
    /// Each action starts from a blank status line; failures write their own.
    pub fn apply_action(&mut self, action: UiAction) -> Option<BackendCommand> {
        self.status.clear();
        match action {
            UiAction::SelectColor(color) => {
                self.selected_color = color;
                None
            }
            UiAction::PaintSquare { face, index } => {
                if let Err(err) = self.cube.set_square_color(face, index, self.selected_color) {
                    error!("rejected square click: {err}");
                    self.status = err.to_string();
                }
                None
            }
            UiAction::Clear => {
                self.cube.clear();
                None
            }
            UiAction::Reset => {
                self.cube.reset();
                None
            }
            UiAction::Scramble => self.begin_scramble(),
            UiAction::Solve => self.begin_solve(),
            UiAction::CancelSolve => self.cancel_solve(),
            UiAction::HighlightMove(index) => {
                if let SolutionPanel::Moves {
                    moves, highlighted, ..
                } = &mut self.panel
                {
                    if index < moves.len() {
                        *highlighted = Some(index);
                    }
                }
                None
            }
        }
    }

    fn begin_solve(&mut self) -> Option<BackendCommand> {
        if let SolvePhase::Solving(ticket) = self.solve {
            debug!(ticket = ticket.0, "solve already in flight; ignoring trigger");
            return None;
        }
        if !self.cube.is_valid_state() {
            self.panel = SolutionPanel::Error(INVALID_STATE_MESSAGE.to_string());
            return None;
        }

        let ticket = self.issue_ticket();
        self.solve = SolvePhase::Solving(ticket);
        self.panel = SolutionPanel::Loading;
        Some(BackendCommand::Solve {
            ticket,
            state: self.cube.clone(),
        })
    }

    fn cancel_solve(&mut self) -> Option<BackendCommand> {
        let SolvePhase::Solving(ticket) = self.solve else {
            return None;
        };
        info!(ticket = ticket.0, "solve cancelled by user");
        self.solve = SolvePhase::Idle;
        self.panel = SolutionPanel::Cancelled;
        Some(BackendCommand::CancelSolve { ticket })
    }

    fn begin_scramble(&mut self) -> Option<BackendCommand> {
        if let Some(ticket) = self.scramble {
            debug!(ticket = ticket.0, "scramble already in flight; ignoring trigger");
            return None;
        }
        let ticket = self.issue_ticket();
        self.scramble = Some(ticket);
        Some(BackendCommand::Scramble { ticket })
    }

    /// Settles whichever slot holds `ticket` after its command could not be
    /// queued. A lost scramble still falls back to the local shuffle.
    pub fn abandon_request(&mut self, ticket: Ticket) {
        if self.solve == SolvePhase::Solving(ticket) {
            self.solve = SolvePhase::Idle;
            self.panel = SolutionPanel::Error(self.status.clone());
        }
        if self.scramble == Some(ticket) {
            self.scramble = None;
            self.cube.shuffle(&mut self.rng);
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::BackendUnavailable(message) => {
                error!("backend unavailable: {message}");
                self.status = message;
            }
            UiEvent::SolveFinished { ticket, outcome } => {
                if self.solve != SolvePhase::Solving(ticket) {
                    debug!(ticket = ticket.0, "dropping stale solve result");
                    return;
                }
                self.solve = SolvePhase::Idle;
                self.panel = match outcome {
                    Ok(response) if response.solution.is_empty() => SolutionPanel::AlreadySolved,
                    Ok(response) => SolutionPanel::Moves {
                        count: response.moves,
                        moves: response.solution,
                        highlighted: None,
                    },
                    Err(err) => SolutionPanel::Error(err.to_string()),
                };
            }
            UiEvent::ScrambleFinished { ticket, outcome } => {
                if self.scramble != Some(ticket) {
                    debug!(ticket = ticket.0, "dropping stale scramble result");
                    return;
                }
                self.scramble = None;
                match outcome {
                    Ok(response) => info!(
                        server_sequence = %format_sequence(&response.scramble),
                        "scramble service answered; applying local shuffle"
                    ),
                    Err(err) => warn!("{err}; falling back to local shuffle"),
                }
                self.cube.shuffle(&mut self.rng);
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

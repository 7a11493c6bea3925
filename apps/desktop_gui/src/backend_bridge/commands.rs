//! Backend commands queued from UI to backend worker.

use shared::cube::CubeState;

use crate::controller::events::Ticket;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    Solve { ticket: Ticket, state: CubeState },
    CancelSolve { ticket: Ticket },
    Scramble { ticket: Ticket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Solve { .. } => "solve",
            BackendCommand::CancelSolve { .. } => "cancel_solve",
            BackendCommand::Scramble { .. } => "scramble",
        }
    }

    pub fn ticket(&self) -> Ticket {
        match self {
            BackendCommand::Solve { ticket, .. }
            | BackendCommand::CancelSolve { ticket }
            | BackendCommand::Scramble { ticket } => *ticket,
        }
    }
}

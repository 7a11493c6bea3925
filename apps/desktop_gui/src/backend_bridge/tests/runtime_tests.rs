use super::*;
use async_trait::async_trait;
use client_core::{Operation, SolverError};
use crossbeam_channel::{bounded, RecvTimeoutError};
use shared::{
    cube::CubeState,
    domain::Face,
    notation::{Move, Turn},
    protocol::{ScrambleResponse, SolveResponse},
};
use std::time::Duration;

struct FakeSolver {
    solve_delay: Duration,
    scramble_fails: bool,
}

#[async_trait]
impl SolverApi for FakeSolver {
    async fn solve(&self, state: &CubeState) -> Result<SolveResponse, SolverError> {
        tokio::time::sleep(self.solve_delay).await;
        if state.is_solved() {
            return Ok(SolveResponse::solved(Vec::new()));
        }
        Ok(SolveResponse::solved(vec![Move::new(Face::R, Turn::Half)]))
    }

    async fn scramble(&self) -> Result<ScrambleResponse, SolverError> {
        if self.scramble_fails {
            return Err(SolverError::Server {
                operation: Operation::Scramble,
                status: Some(503),
                message: "generator offline".to_string(),
            });
        }
        Ok(ScrambleResponse {
            success: true,
            scramble: Vec::new(),
        })
    }
}

fn start(solver: FakeSolver) -> (Sender<BackendCommand>, Receiver<UiEvent>, thread::JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    let worker = launch(Arc::new(solver), cmd_rx, ui_tx);
    match ui_rx.recv_timeout(Duration::from_secs(5)) {
        Ok(UiEvent::Info(message)) => assert_eq!(message, "Backend worker ready"),
        other => panic!("expected ready event, got {other:?}"),
    }
    (cmd_tx, ui_rx, worker)
}

#[test]
fn solve_result_is_posted_with_its_ticket() {
    let (cmd_tx, ui_rx, worker) = start(FakeSolver {
        solve_delay: Duration::ZERO,
        scramble_fails: false,
    });

    cmd_tx
        .send(BackendCommand::Solve {
            ticket: Ticket(4),
            state: CubeState::solved(),
        })
        .expect("queue solve");

    match ui_rx.recv_timeout(Duration::from_secs(5)) {
        Ok(UiEvent::SolveFinished { ticket, outcome }) => {
            assert_eq!(ticket, Ticket(4));
            assert!(outcome.expect("solve ok").solution.is_empty());
        }
        other => panic!("unexpected event {other:?}"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exits");
}

#[test]
fn cancelled_solve_never_reports_back() {
    let (cmd_tx, ui_rx, worker) = start(FakeSolver {
        solve_delay: Duration::from_millis(500),
        scramble_fails: false,
    });

    cmd_tx
        .send(BackendCommand::Solve {
            ticket: Ticket(1),
            state: CubeState::cleared(),
        })
        .expect("queue solve");
    cmd_tx
        .send(BackendCommand::CancelSolve { ticket: Ticket(1) })
        .expect("queue cancel");

    assert!(matches!(
        ui_rx.recv_timeout(Duration::from_millis(1200)),
        Err(RecvTimeoutError::Timeout)
    ));

    drop(cmd_tx);
    worker.join().expect("worker exits");
}

#[test]
fn scramble_failure_is_forwarded_to_ui() {
    let (cmd_tx, ui_rx, worker) = start(FakeSolver {
        solve_delay: Duration::ZERO,
        scramble_fails: true,
    });

    cmd_tx
        .send(BackendCommand::Scramble { ticket: Ticket(2) })
        .expect("queue scramble");

    match ui_rx.recv_timeout(Duration::from_secs(5)) {
        Ok(UiEvent::ScrambleFinished { ticket, outcome }) => {
            assert_eq!(ticket, Ticket(2));
            let err = outcome.expect_err("scramble fails");
            assert_eq!(err.to_string(), "Scramble error: generator offline");
        }
        other => panic!("unexpected event {other:?}"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exits");
}

use super::*;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::{
    domain::{Color, Face},
    notation::{Move, Turn},
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

async fn spawn_solver_service(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/api")
}

fn client_for(base_url: &str) -> SolverClient {
    SolverClient::new(base_url, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn solve_posts_cube_state_and_parses_moves() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = captured.clone();
    let router = Router::new().route(
        "/api/solve",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().await = Some(body);
                Json(json!({ "success": true, "solution": ["R", "U'", "F2"], "moves": 3 }))
            }
        }),
    );
    let base_url = spawn_solver_service(router).await;

    let mut state = CubeState::solved();
    state
        .set_square_color(Face::U, 0, Color::Red)
        .expect("valid cell");
    let response = client_for(&base_url).solve(&state).await.expect("solve");

    assert!(response.success);
    assert_eq!(response.moves, 3);
    assert_eq!(
        response.solution,
        vec![
            Move::new(Face::R, Turn::Clockwise),
            Move::new(Face::U, Turn::CounterClockwise),
            Move::new(Face::F, Turn::Half),
        ]
    );

    let body = captured.lock().await.take().expect("request body");
    assert_eq!(body["cubeState"]["U"][0], "R");
    assert_eq!(body["cubeState"]["U"][1], "W");
    assert_eq!(body["cubeState"]["B"][8], "B");
}

#[tokio::test]
async fn solve_wraps_server_error_message() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid cube state" })),
            )
        }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .solve(&CubeState::solved())
        .await
        .expect_err("400 must fail");

    assert_eq!(err.to_string(), "Solver error: Invalid cube state");
    assert_eq!(err.operation(), Operation::Solve);
    match err {
        SolverError::Server { status, .. } => assert_eq!(status, Some(400)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn solve_falls_back_to_default_message_without_error_body() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .solve(&CubeState::solved())
        .await
        .expect_err("500 must fail");

    assert_eq!(err.to_string(), "Solver error: Failed to solve cube");
}

#[tokio::test]
async fn solve_falls_back_to_default_message_for_blank_error() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "" }))) }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .solve(&CubeState::solved())
        .await
        .expect_err("400 must fail");

    assert_eq!(err.to_string(), "Solver error: Failed to solve cube");
}

#[tokio::test]
async fn solve_reports_unsuccessful_body_as_no_solution() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async { Json(json!({ "success": false })) }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .solve(&CubeState::solved())
        .await
        .expect_err("success=false must fail");

    assert_eq!(err.to_string(), "Solver error: No solution found");
}

#[tokio::test]
async fn solve_reports_malformed_move_tokens_as_decode_error() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async { Json(json!({ "success": true, "solution": ["Q"], "moves": 1 })) }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .solve(&CubeState::solved())
        .await
        .expect_err("bad token must fail");

    assert!(matches!(err, SolverError::Decode { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Solver error: malformed response"));
}

#[tokio::test]
async fn scramble_returns_server_payload() {
    let router = Router::new().route(
        "/api/scramble",
        get(|| async { Json(json!({ "success": true, "scramble": ["D2", "L'", "B"] })) }),
    );
    let base_url = spawn_solver_service(router).await;

    let response = client_for(&base_url).scramble().await.expect("scramble");

    assert!(response.success);
    assert_eq!(response.scramble.len(), 3);
    assert_eq!(response.scramble[1], Move::new(Face::L, Turn::CounterClockwise));
}

#[tokio::test]
async fn scramble_wraps_server_error_message() {
    let router = Router::new().route(
        "/api/scramble",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "generator offline" })),
            )
        }),
    );
    let base_url = spawn_solver_service(router).await;

    let err = client_for(&base_url)
        .scramble()
        .await
        .expect_err("500 must fail");

    assert_eq!(err.to_string(), "Scramble error: generator offline");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}/api"))
        .scramble()
        .await
        .expect_err("nothing listening");

    assert!(matches!(err, SolverError::Transport { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Scramble error: "));
}

#[tokio::test]
async fn slow_service_times_out() {
    let router = Router::new().route(
        "/api/solve",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "success": true, "solution": [], "moves": 0 }))
        }),
    );
    let base_url = spawn_solver_service(router).await;
    let client = SolverClient::new(&base_url, Duration::from_millis(200)).expect("client");

    let err = client
        .solve(&CubeState::solved())
        .await
        .expect_err("must time out");

    match err {
        SolverError::Timeout { operation, timeout } => {
            assert_eq!(operation, Operation::Solve);
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_invalid_base_url() {
    let err = SolverClient::new("not a url", DEFAULT_REQUEST_TIMEOUT).expect_err("invalid");
    assert!(err.to_string().contains("invalid solver service url"));
}

#[test]
fn trims_trailing_slash_from_base_url() {
    let client = SolverClient::new("http://localhost:5000/api/", DEFAULT_REQUEST_TIMEOUT)
        .expect("client");
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

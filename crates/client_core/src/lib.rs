use std::{fmt, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    cube::CubeState,
    error::ApiError,
    notation::format_sequence,
    protocol::{ScrambleResponse, SolveRequest, SolveResponse},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub mod settings;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const NO_SOLUTION_MESSAGE: &str = "No solution found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Solve,
    Scramble,
}

impl Operation {
    fn fallback_message(self) -> &'static str {
        match self {
            Operation::Solve => "Failed to solve cube",
            Operation::Scramble => "Failed to generate scramble",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Solve => f.write_str("Solver"),
            Operation::Scramble => f.write_str("Scramble"),
        }
    }
}

/// Every failure of a single solver-service request.
///
/// `Display` always reads `<Operation> error: <message>` so the UI can render
/// any variant inline without further formatting.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("{operation} error: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation} error: request timed out after {timeout:?}")]
    Timeout {
        operation: Operation,
        timeout: Duration,
    },
    #[error("{operation} error: {message}")]
    Server {
        operation: Operation,
        status: Option<u16>,
        message: String,
    },
    #[error("{operation} error: malformed response: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },
}

impl SolverError {
    pub fn operation(&self) -> Operation {
        match self {
            SolverError::Transport { operation, .. }
            | SolverError::Timeout { operation, .. }
            | SolverError::Server { operation, .. }
            | SolverError::Decode { operation, .. } => *operation,
        }
    }
}

#[async_trait]
pub trait SolverApi: Send + Sync {
    async fn solve(&self, state: &CubeState) -> Result<SolveResponse, SolverError>;
    async fn scramble(&self) -> Result<ScrambleResponse, SolverError>;
}

/// Stateless HTTP client for the `/solve` and `/scramble` endpoints.
///
/// Requests are single-shot: no retries. Cancellation is done by dropping or
/// aborting the future awaiting a call.
#[derive(Debug, Clone)]
pub struct SolverClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl SolverClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("invalid solver service url '{base_url}'"))?;
        if parsed.cannot_be_a_base() {
            anyhow::bail!("solver service url '{base_url}' cannot be used as a base path");
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build solver http client")?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, operation: Operation, source: reqwest::Error) -> SolverError {
        if source.is_timeout() {
            SolverError::Timeout {
                operation,
                timeout: self.timeout,
            }
        } else {
            SolverError::Transport { operation, source }
        }
    }

    async fn read_body<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: Response,
    ) -> Result<T, SolverError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(operation, source))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .map(|api_error| api_error.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| operation.fallback_message().to_string());
            warn!(%operation, status = status.as_u16(), %message, "solver service rejected request");
            return Err(SolverError::Server {
                operation,
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|err| SolverError::Decode {
            operation,
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl SolverApi for SolverClient {
    async fn solve(&self, state: &CubeState) -> Result<SolveResponse, SolverError> {
        let operation = Operation::Solve;
        debug!(url = %self.base_url, "submitting cube state for solving");
        let response = self
            .http
            .post(format!("{}/solve", self.base_url))
            .json(&SolveRequest {
                cube_state: state.clone(),
            })
            .send()
            .await
            .map_err(|source| self.transport_error(operation, source))?;

        let body: SolveResponse = self.read_body(operation, response).await?;
        if !body.success {
            return Err(SolverError::Server {
                operation,
                status: None,
                message: NO_SOLUTION_MESSAGE.to_string(),
            });
        }
        debug!(moves = body.moves, solution = %format_sequence(&body.solution), "solution received");
        Ok(body)
    }

    async fn scramble(&self) -> Result<ScrambleResponse, SolverError> {
        let operation = Operation::Scramble;
        let response = self
            .http
            .get(format!("{}/scramble", self.base_url))
            .send()
            .await
            .map_err(|source| self.transport_error(operation, source))?;

        let body: ScrambleResponse = self.read_body(operation, response).await?;
        if !body.success {
            return Err(SolverError::Server {
                operation,
                status: None,
                message: operation.fallback_message().to_string(),
            });
        }
        debug!(scramble = %format_sequence(&body.scramble), "scramble received");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

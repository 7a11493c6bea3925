use serde::{Deserialize, Deserializer, Serialize};

use crate::{cube::CubeState, notation::Move};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(rename = "cubeState")]
    pub cube_state: CubeState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub solution: Vec<Move>,
    #[serde(default)]
    pub moves: usize,
}

impl SolveResponse {
    pub fn solved(solution: Vec<Move>) -> Self {
        Self {
            success: true,
            moves: solution.len(),
            solution,
        }
    }
}

/// Scramble endpoint payload. Only `success` drives client behaviour; the
/// move sequence is kept for logging and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scramble: Vec<Move>,
}

/// An explicit `null` move list reads as no moves.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Move>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Move>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;

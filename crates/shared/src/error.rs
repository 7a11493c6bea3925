use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Face, STICKERS_PER_FACE};

/// Failure body returned by the solver service on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    #[error("sticker index {index} out of range for face {face} (expected 0..{max})", max = STICKERS_PER_FACE)]
    IndexOutOfRange { face: Face, index: usize },
    #[error("unknown color code {0:?}")]
    UnknownColor(String),
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    #[error("cube state is missing face {0}")]
    MissingFace(Face),
    #[error("face {face} has {len} stickers, expected {expected}", expected = STICKERS_PER_FACE)]
    FaceLength { face: Face, len: usize },
    #[error("face {face} sticker {index} is unset")]
    UnsetSticker { face: Face, index: usize },
    #[error("malformed move token {0:?}")]
    InvalidMove(String),
}

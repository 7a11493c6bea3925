pub mod cube;
pub mod domain;
pub mod error;
pub mod notation;
pub mod protocol;

pub use cube::{ColorCounts, CubeState};
pub use domain::{Color, Face};
pub use error::{ApiError, CubeError};
pub use notation::{Move, Turn};

//! Sticker-level cube state: 6 faces of 9 stickers, each a colour or unset.

use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        parse_sticker, sticker_code, Color, Face, COLOR_COUNT, FACE_COUNT, STICKERS_PER_FACE,
    },
    error::CubeError,
};

/// Face order used by facelet strings for two-phase solvers.
const FACELET_ORDER: [Face; FACE_COUNT] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

/// Shown when a state fails [`CubeState::is_valid_state`] before solving.
pub const INVALID_STATE_MESSAGE: &str =
    "Invalid cube state! Please ensure you have exactly 9 squares of each color.";

pub type FaceStickers = [Option<Color>; STICKERS_PER_FACE];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Face, Vec<String>>",
    into = "BTreeMap<Face, Vec<String>>"
)]
pub struct CubeState {
    faces: [FaceStickers; FACE_COUNT],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    pub fn solved() -> Self {
        let mut faces = [[None; STICKERS_PER_FACE]; FACE_COUNT];
        for face in Face::ALL {
            faces[face.ordinal()] = [Some(face.home_color()); STICKERS_PER_FACE];
        }
        Self { faces }
    }

    pub fn cleared() -> Self {
        Self {
            faces: [[None; STICKERS_PER_FACE]; FACE_COUNT],
        }
    }

    /// Builds a state from a uniformly shuffled multiset of 9 stickers per colour.
    ///
    /// The result always passes [`CubeState::is_valid_state`] but is not
    /// guaranteed to be reachable by face turns.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::cleared();
        state.shuffle(rng);
        state
    }

    pub fn face(&self, face: Face) -> &FaceStickers {
        &self.faces[face.ordinal()]
    }

    pub fn sticker(&self, face: Face, index: usize) -> Result<Option<Color>, CubeError> {
        self.faces[face.ordinal()]
            .get(index)
            .copied()
            .ok_or(CubeError::IndexOutOfRange { face, index })
    }

    pub fn set_square_color(
        &mut self,
        face: Face,
        index: usize,
        color: Color,
    ) -> Result<(), CubeError> {
        let slot = self.faces[face.ordinal()]
            .get_mut(index)
            .ok_or(CubeError::IndexOutOfRange { face, index })?;
        *slot = Some(color);
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::cleared();
    }

    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut pool: Vec<Color> = Color::ALL
            .iter()
            .flat_map(|color| std::iter::repeat(*color).take(STICKERS_PER_FACE))
            .collect();
        pool.shuffle(rng);

        let mut pool = pool.into_iter();
        for face in self.faces.iter_mut() {
            for slot in face.iter_mut() {
                *slot = pool.next();
            }
        }
    }

    /// Iterates every sticker in face order, then index order.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, usize, Option<Color>)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            self.face(face)
                .iter()
                .enumerate()
                .map(move |(index, sticker)| (face, index, *sticker))
        })
    }

    pub fn color_counts(&self) -> ColorCounts {
        let mut counts = ColorCounts::default();
        for (_, _, sticker) in self.stickers() {
            if let Some(color) = sticker {
                counts.0[color.ordinal()] += 1;
            }
        }
        counts
    }

    /// True iff each of the six colours appears exactly nine times.
    ///
    /// This is a necessary condition for a physical cube only; piece
    /// permutation and orientation parity are not checked.
    pub fn is_valid_state(&self) -> bool {
        self.color_counts().is_balanced()
    }

    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| {
            let first = face[0];
            first.is_some() && face.iter().all(|sticker| *sticker == first)
        })
    }

    /// 54-character facelet string in URFDLB order, each colour replaced by the
    /// face letter of its canonical centre.
    pub fn to_facelet_string(&self) -> Result<String, CubeError> {
        let mut out = String::with_capacity(FACE_COUNT * STICKERS_PER_FACE);
        for face in FACELET_ORDER {
            for (index, sticker) in self.face(face).iter().enumerate() {
                let color = sticker.ok_or(CubeError::UnsetSticker { face, index })?;
                out.push(color.home_face().letter());
            }
        }
        Ok(out)
    }
}

impl TryFrom<BTreeMap<Face, Vec<String>>> for CubeState {
    type Error = CubeError;

    fn try_from(mut wire: BTreeMap<Face, Vec<String>>) -> Result<Self, Self::Error> {
        let mut state = Self::cleared();
        for face in Face::ALL {
            let raw = wire.remove(&face).ok_or(CubeError::MissingFace(face))?;
            if raw.len() != STICKERS_PER_FACE {
                return Err(CubeError::FaceLength {
                    face,
                    len: raw.len(),
                });
            }
            for (slot, code) in state.faces[face.ordinal()].iter_mut().zip(&raw) {
                *slot = parse_sticker(code)?;
            }
        }
        Ok(state)
    }
}

impl From<CubeState> for BTreeMap<Face, Vec<String>> {
    fn from(state: CubeState) -> Self {
        Face::ALL
            .into_iter()
            .map(|face| {
                let codes = state.face(face).iter().map(|s| sticker_code(*s)).collect();
                (face, codes)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCounts([usize; COLOR_COUNT]);

impl ColorCounts {
    pub fn get(&self, color: Color) -> usize {
        self.0[color.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::ALL.into_iter().map(|color| (color, self.get(color)))
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.0.iter().all(|count| *count == STICKERS_PER_FACE)
    }
}

#[cfg(test)]
#[path = "tests/cube_tests.rs"]
mod tests;

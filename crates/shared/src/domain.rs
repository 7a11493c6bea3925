use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

pub const FACE_COUNT: usize = 6;
pub const STICKERS_PER_FACE: usize = 9;
pub const COLOR_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, CubeError> {
        match letter {
            'U' => Ok(Face::U),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'B' => Ok(Face::B),
            other => Err(CubeError::UnknownFace(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::U => "Up",
            Face::D => "Down",
            Face::L => "Left",
            Face::R => "Right",
            Face::F => "Front",
            Face::B => "Back",
        }
    }

    /// Colour of this face in the canonical solved layout.
    pub fn home_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "O")]
    Orange,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "B")]
    Blue,
}

impl Color {
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    pub fn from_code(code: char) -> Result<Self, CubeError> {
        match code {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'O' => Ok(Color::Orange),
            'R' => Ok(Color::Red),
            'G' => Ok(Color::Green),
            'B' => Ok(Color::Blue),
            other => Err(CubeError::UnknownColor(other.to_string())),
        }
    }

    /// Visual class a rendered square carries for this colour.
    pub fn class_name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Face whose centre carries this colour in the canonical layout.
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Blue => Face::B,
        }
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses one wire sticker: a single colour code, or the empty string for unset.
pub fn parse_sticker(raw: &str) -> Result<Option<Color>, CubeError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(code), None) => Color::from_code(code).map(Some),
        _ => Err(CubeError::UnknownColor(raw.to_string())),
    }
}

pub fn sticker_code(sticker: Option<Color>) -> String {
    sticker.map(|color| color.code().to_string()).unwrap_or_default()
}

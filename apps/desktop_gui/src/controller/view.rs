//! Pure render functions: `UiState` in, plain view models out.
//!
//! Nothing here touches egui, so the presentation rules can be tested
//! without a window.

use shared::{
    cube::CubeState,
    domain::{Color, Face},
};

use crate::controller::reducer::{SolutionPanel, SolvePhase, UiState};

pub const SOLVE_LABEL: &str = "Solve";
pub const SOLVING_LABEL: &str = "Solving...";
pub const SCRAMBLE_LABEL: &str = "Scramble";
pub const SCRAMBLING_LABEL: &str = "Scrambling...";
pub const LOADING_MESSAGE: &str = "Calculating solution...";
pub const ALREADY_SOLVED_MESSAGE: &str = "Cube is already solved!";
pub const CANCELLED_MESSAGE: &str = "Solve cancelled.";

/// Unfolded cube net, row by row; `None` marks an empty slot.
pub const NET_LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::U), None, None],
    [Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    [None, Some(Face::D), None, None],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub face: Face,
    pub index: usize,
    pub sticker: Option<Color>,
    /// Visual class; empty for an unset sticker.
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceView {
    pub face: Face,
    pub squares: Vec<SquareView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchView {
    pub color: Color,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView {
    pub solve: ButtonView,
    pub cancel: ButtonView,
    pub scramble: ButtonView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStyle {
    Done,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTokenView {
    pub index: usize,
    pub label: String,
    pub style: MoveStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Success,
    Notice,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Hidden,
    Message { kind: MessageKind, text: String },
    Solution {
        tokens: Vec<MoveTokenView>,
        info: Vec<String>,
    },
}

pub fn square_view(face: Face, index: usize, sticker: Option<Color>) -> SquareView {
    SquareView {
        face,
        index,
        sticker,
        class: sticker.map(Color::class_name).unwrap_or(""),
    }
}

pub fn face_view(cube: &CubeState, face: Face) -> FaceView {
    let squares = cube
        .face(face)
        .iter()
        .enumerate()
        .map(|(index, sticker)| square_view(face, index, *sticker))
        .collect();
    FaceView { face, squares }
}

pub fn cube_view(cube: &CubeState) -> Vec<FaceView> {
    Face::ALL
        .into_iter()
        .map(|face| face_view(cube, face))
        .collect()
}

pub fn palette_view(selected: Color) -> Vec<SwatchView> {
    Color::ALL
        .into_iter()
        .map(|color| SwatchView {
            color,
            selected: color == selected,
        })
        .collect()
}

pub fn controls_view(state: &UiState) -> ControlsView {
    let solving = matches!(state.solve, SolvePhase::Solving(_));
    let scrambling = state.scramble.is_some();
    ControlsView {
        solve: ButtonView {
            label: if solving { SOLVING_LABEL } else { SOLVE_LABEL },
            enabled: !solving,
        },
        cancel: ButtonView {
            label: "Cancel",
            enabled: solving,
        },
        scramble: ButtonView {
            label: if scrambling {
                SCRAMBLING_LABEL
            } else {
                SCRAMBLE_LABEL
            },
            enabled: !scrambling,
        },
    }
}

pub fn panel_view(panel: &SolutionPanel) -> PanelView {
    match panel {
        SolutionPanel::Hidden => PanelView::Hidden,
        SolutionPanel::Loading => PanelView::Message {
            kind: MessageKind::Loading,
            text: LOADING_MESSAGE.to_string(),
        },
        SolutionPanel::AlreadySolved => PanelView::Message {
            kind: MessageKind::Success,
            text: ALREADY_SOLVED_MESSAGE.to_string(),
        },
        SolutionPanel::Cancelled => PanelView::Message {
            kind: MessageKind::Notice,
            text: CANCELLED_MESSAGE.to_string(),
        },
        SolutionPanel::Error(message) => PanelView::Message {
            kind: MessageKind::Error,
            text: message.clone(),
        },
        SolutionPanel::Moves {
            moves,
            count,
            highlighted,
        } => {
            let tokens = moves
                .iter()
                .enumerate()
                .map(|(index, mv)| MoveTokenView {
                    index,
                    label: mv.to_string(),
                    style: match highlighted {
                        Some(upto) if index <= *upto => MoveStyle::Done,
                        _ => MoveStyle::Pending,
                    },
                })
                .collect();
            PanelView::Solution {
                tokens,
                info: vec![
                    "Solution found!".to_string(),
                    format!("Number of moves: {count}"),
                    "Click on each move above to see the sequence.".to_string(),
                ],
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

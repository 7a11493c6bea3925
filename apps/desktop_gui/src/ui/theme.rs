use eframe::egui::Color32;
use shared::domain::Color;

use crate::controller::view::{MessageKind, MoveStyle};

pub const UNSET_FILL: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
pub const SQUARE_STROKE: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const SELECTED_STROKE: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);

pub fn sticker_fill(sticker: Option<Color>) -> Color32 {
    match sticker {
        None => UNSET_FILL,
        Some(Color::White) => Color32::from_rgb(0xff, 0xff, 0xff),
        Some(Color::Yellow) => Color32::from_rgb(0xff, 0xd5, 0x00),
        Some(Color::Orange) => Color32::from_rgb(0xff, 0x58, 0x00),
        Some(Color::Red) => Color32::from_rgb(0xc4, 0x1e, 0x3a),
        Some(Color::Green) => Color32::from_rgb(0x00, 0x9e, 0x60),
        Some(Color::Blue) => Color32::from_rgb(0x00, 0x51, 0xba),
    }
}

pub fn move_fill(style: MoveStyle) -> Color32 {
    match style {
        MoveStyle::Done => Color32::from_rgb(0x28, 0xa7, 0x45),
        MoveStyle::Pending => Color32::from_rgb(0x00, 0x7b, 0xff),
    }
}

pub fn message_color(kind: MessageKind) -> Color32 {
    match kind {
        MessageKind::Loading => Color32::from_rgb(0x6c, 0x75, 0x7d),
        MessageKind::Success => Color32::from_rgb(0x28, 0xa7, 0x45),
        MessageKind::Notice => Color32::from_rgb(0xe0, 0xa8, 0x00),
        MessageKind::Error => Color32::from_rgb(0xdc, 0x35, 0x45),
    }
}

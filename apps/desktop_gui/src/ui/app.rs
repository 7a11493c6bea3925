use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Color;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiAction, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::UiState,
    view::{
        controls_view, cube_view, palette_view, panel_view, ButtonView, FaceView, MessageKind,
        PanelView, NET_LAYOUT,
    },
};
use crate::ui::theme;

const SQUARE_SIZE: f32 = 34.0;
const SQUARE_GAP: f32 = 2.0;
const FACE_GAP: f32 = 6.0;
const FACE_SPAN: f32 = SQUARE_SIZE * 3.0 + SQUARE_GAP * 2.0;

pub struct RufixApp {
    state: UiState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
}

impl RufixApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, server_url: String) -> Self {
        Self {
            state: UiState::new(),
            cmd_tx,
            ui_rx,
            server_url,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            let Some(cmd) = self.state.apply_action(action) else {
                continue;
            };
            let ticket = cmd.ticket();
            if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status) {
                tracing::warn!(ticket = ticket.0, status = %self.state.status, "backend command dropped");
                self.state.abandon_request(ticket);
            }
        }
    }

    fn show_palette(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            ui.label("Color:");
            for swatch in palette_view(self.state.selected_color) {
                let stroke = if swatch.selected {
                    egui::Stroke::new(3.0, theme::SELECTED_STROKE)
                } else {
                    egui::Stroke::new(1.0, theme::SQUARE_STROKE)
                };
                let button = egui::Button::new("")
                    .fill(theme::sticker_fill(Some(swatch.color)))
                    .stroke(stroke)
                    .min_size(egui::vec2(SQUARE_SIZE, SQUARE_SIZE));
                if ui
                    .add(button)
                    .on_hover_text(swatch.color.class_name())
                    .clicked()
                {
                    actions.push(UiAction::SelectColor(swatch.color));
                }
            }
        });
    }

    fn show_net(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let faces = cube_view(&self.state.cube);
        for row in NET_LAYOUT {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(FACE_GAP, FACE_GAP);
                for slot in row {
                    match slot.and_then(|face| faces.iter().find(|view| view.face == face)) {
                        Some(face_view) => show_face(ui, face_view, actions),
                        None => {
                            ui.allocate_space(egui::vec2(FACE_SPAN, FACE_SPAN));
                        }
                    }
                }
            });
        }
    }

    fn show_controls(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let controls = controls_view(&self.state);
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                actions.push(UiAction::Clear);
            }
            if ui.button("Reset").clicked() {
                actions.push(UiAction::Reset);
            }
            if control_button(ui, controls.scramble) {
                actions.push(UiAction::Scramble);
            }
            if control_button(ui, controls.solve) {
                actions.push(UiAction::Solve);
            }
            if control_button(ui, controls.cancel) {
                actions.push(UiAction::CancelSolve);
            }
        });
    }

    fn show_solution(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        match panel_view(&self.state.panel) {
            PanelView::Hidden => {}
            PanelView::Message { kind, text } => {
                ui.horizontal(|ui| {
                    if kind == MessageKind::Loading {
                        ui.spinner();
                    }
                    ui.label(egui::RichText::new(text).color(theme::message_color(kind)));
                });
            }
            PanelView::Solution { tokens, info } => {
                ui.horizontal_wrapped(|ui| {
                    for token in tokens {
                        let button = egui::Button::new(
                            egui::RichText::new(&token.label)
                                .monospace()
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(theme::move_fill(token.style));
                        if ui.add(button).clicked() {
                            actions.push(UiAction::HighlightMove(token.index));
                        }
                    }
                });
                for line in info {
                    ui.label(line);
                }
            }
        }
    }
}

fn show_face(ui: &mut egui::Ui, face_view: &FaceView, actions: &mut Vec<UiAction>) {
    egui::Grid::new(("face", face_view.face.letter()))
        .spacing([SQUARE_GAP, SQUARE_GAP])
        .show(ui, |ui| {
            for (index, square) in face_view.squares.iter().enumerate() {
                let label = if index == 4 {
                    egui::RichText::new(face_view.face.letter().to_string())
                        .color(centre_text(square.sticker))
                } else {
                    egui::RichText::new("")
                };
                let button = egui::Button::new(label)
                    .fill(theme::sticker_fill(square.sticker))
                    .stroke(egui::Stroke::new(1.0, theme::SQUARE_STROKE))
                    .min_size(egui::vec2(SQUARE_SIZE, SQUARE_SIZE));
                let response = ui.add(button).on_hover_text(format!(
                    "{} face, square {}",
                    face_view.face.name(),
                    square.index
                ));
                if response.clicked() {
                    actions.push(UiAction::PaintSquare {
                        face: square.face,
                        index: square.index,
                    });
                }
                if index % 3 == 2 {
                    ui.end_row();
                }
            }
        });
}

fn centre_text(sticker: Option<Color>) -> egui::Color32 {
    match sticker {
        Some(Color::White | Color::Yellow) | None => egui::Color32::BLACK,
        Some(_) => egui::Color32::WHITE,
    }
}

fn control_button(ui: &mut egui::Ui, view: ButtonView) -> bool {
    ui.add_enabled(view.enabled, egui::Button::new(view.label))
        .clicked()
}

impl eframe::App for RufixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let counts = self.state.cube.color_counts();
                for (color, count) in counts.iter() {
                    ui.label(format!("{}: {count}", color.code()));
                }
                ui.separator();
                ui.label(format!("Server: {}", self.server_url));
                if !self.state.status.is_empty() {
                    ui.separator();
                    ui.label(self.state.status.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Rubik's Cube Solver");
            ui.add_space(8.0);
            self.show_palette(ui, &mut actions);
            ui.add_space(8.0);
            self.show_net(ui, &mut actions);
            ui.add_space(8.0);
            self.show_controls(ui, &mut actions);
            ui.separator();
            self.show_solution(ui, &mut actions);
        });

        self.apply_actions(actions);

        if self.state.is_solving() || self.state.scramble.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

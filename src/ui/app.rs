use crate::ops::keyframe_ops;
use crate::player::transport::{AnimConfig, AnimTransport};
use crate::types::diagram::Diagram;
use crate::ui::anim_player::{anim_player_window, AnimPlayerEvent};
use crate::ui::palette::palette_panel;
use crate::ui::pitch_widget::{self, EditorState, PitchEvent, PitchWidget};
use eframe::egui;
use std::sync::{Arc, RwLock};

/// Render state for an active playback session. The transport hooks
/// write it, the pitch canvas reads it.
pub struct PlaybackView {
    /// Snapshot of the diagram taken when the session opened, so edits
    /// cannot shear a running animation.
    pub diagram: Diagram,
    pub time_ms: f64,
}

pub struct PitchApp {
    diagram: Arc<RwLock<Diagram>>,
    transport: AnimTransport,
    playback_view: Arc<RwLock<Option<PlaybackView>>>,
    editor_state: EditorState,
}

impl PitchApp {
    pub fn new(diagram: Diagram) -> Self {
        let diagram = Arc::new(RwLock::new(diagram));
        let playback_view: Arc<RwLock<Option<PlaybackView>>> = Arc::new(RwLock::new(None));

        let mut transport = AnimTransport::new(AnimConfig::new(0, 0.0));
        let hooks = transport.hooks_mut();
        let (source, view) = (diagram.clone(), playback_view.clone());
        hooks.on_start = Some(Box::new(move || {
            let snapshot = source.read().unwrap().clone();
            *view.write().unwrap() = Some(PlaybackView {
                diagram: snapshot,
                time_ms: 0.0,
            });
        }));
        let view = playback_view.clone();
        hooks.on_frame = Some(Box::new(move |time_ms| {
            if let Some(view) = view.write().unwrap().as_mut() {
                view.time_ms = time_ms;
            }
        }));
        let view = playback_view.clone();
        hooks.on_stop = Some(Box::new(move || {
            *view.write().unwrap() = None;
        }));

        Self {
            diagram,
            transport,
            playback_view,
            editor_state: EditorState::default(),
        }
    }

    /// Reads the current key frame set into the transport config and
    /// opens the player.
    fn open_player(&mut self) {
        let (count, duration) = {
            let diagram = self.diagram.read().unwrap();
            (diagram.key_frame_count(), diagram.key_frame_duration)
        };
        self.transport.set_config(AnimConfig::new(count, duration));
        self.transport.show();
    }

    fn apply_player_event(&mut self, event: AnimPlayerEvent) {
        match event {
            AnimPlayerEvent::LoopToggled => self.transport.toggle_loop(),
            AnimPlayerEvent::PreviousKeyFrame => self.transport.step_to_previous_key_frame(),
            AnimPlayerEvent::PlayPause => self.transport.toggle_play_pause(),
            AnimPlayerEvent::NextKeyFrame => self.transport.step_to_next_key_frame(),
            AnimPlayerEvent::Stop => self.transport.stop(),
            AnimPlayerEvent::Closed => self.transport.close(),
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let editing = !self.transport.is_open();
            {
                let mut diagram = self.diagram.write().unwrap();
                ui.label(egui::RichText::new(diagram.name.clone()).strong());
                ui.separator();

                ui.add_enabled_ui(editing, |ui| {
                    if ui.button("Capture key frame").clicked() {
                        let count = diagram.capture_key_frame();
                        log::info!("captured key frame #{count}");
                    }
                    ui.label(format!("Key frames: {}", diagram.key_frame_count()));
                    if ui
                        .add_enabled(diagram.key_frame_count() > 0, egui::Button::new("Clear"))
                        .clicked()
                    {
                        diagram.clear_key_frames();
                        log::info!("cleared key frames");
                    }
                    ui.separator();
                    ui.label("Key frame duration (s):");
                    ui.add(
                        egui::DragValue::new(&mut diagram.key_frame_duration)
                            .speed(0.1)
                            .range(0.1..=30.0),
                    );
                    ui.separator();
                    let selected = self.editor_state.selected.clone();
                    if ui
                        .add_enabled(selected.is_some(), egui::Button::new("Remove element"))
                        .clicked()
                    {
                        if let Some(id) = selected {
                            if diagram.remove_element(&id) {
                                log::debug!("removed element {id}");
                            }
                            self.editor_state.selected = None;
                        }
                    }
                });
                ui.separator();
            }
            if ui
                .add_enabled(editing, egui::Button::new("▶ Preview"))
                .clicked()
            {
                self.open_player();
            }
        });
    }
}

impl eframe::App for PitchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the transport from egui's repaint clock. The repaint
        // request below is the "schedule next frame" half of the chain;
        // once the player closes, on_frame declines and the chain ends.
        if self.transport.is_open() {
            let now_ms = ctx.input(|i| i.time) * 1000.0;
            if self.transport.on_frame(now_ms) {
                ctx.request_repaint();
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        egui::SidePanel::left("palette").show(ctx, |ui| {
            ui.add_enabled_ui(!self.transport.is_open(), |ui| {
                let mut diagram = self.diagram.write().unwrap();
                palette_panel(ui, &mut diagram);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let previewing = {
                let view_guard = self.playback_view.read().unwrap();
                if let Some(view) = view_guard.as_ref() {
                    let pose = keyframe_ops::sample_pose(&view.diagram, view.time_ms);
                    pitch_widget::show_preview(ui, &view.diagram, pose.as_ref());
                    true
                } else {
                    false
                }
            };
            if !previewing {
                let mut diagram = self.diagram.write().unwrap();
                let events = PitchWidget::new(&mut diagram, &mut self.editor_state).show(ui);
                for event in events {
                    if let PitchEvent::ElementMoved { id, pos } = event {
                        log::debug!("moved {id} to ({:.0}, {:.0})", pos.x, pos.y);
                    }
                }
            }
        });

        if self.transport.is_open() {
            for event in anim_player_window(ctx, &self.transport) {
                self.apply_player_event(event);
            }
        }
    }
}

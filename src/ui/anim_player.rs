use crate::player::transport::AnimTransport;
use eframe::egui::{self, Align2, Button, ProgressBar, RichText};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPlayerEvent {
    LoopToggled,
    PreviousKeyFrame,
    PlayPause,
    NextKeyFrame,
    Stop,
    Closed,
}

/// Floating playback control window, shown while the transport is open.
/// Returns the control events the user triggered this frame; the caller
/// applies them to the transport.
pub fn anim_player_window(ctx: &egui::Context, transport: &AnimTransport) -> Vec<AnimPlayerEvent> {
    let mut events = Vec::new();
    let mut open = true;

    egui::Window::new("Animation")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(transport.is_loop(), "🔁")
                    .on_hover_text("Loop Animation")
                    .clicked()
                {
                    events.push(AnimPlayerEvent::LoopToggled);
                }
                if ui
                    .add_enabled(!transport.is_previous_disabled(), Button::new("⏮"))
                    .on_hover_text("Previous key frame")
                    .clicked()
                {
                    events.push(AnimPlayerEvent::PreviousKeyFrame);
                }
                let play_pause = if transport.is_playing() { "⏸" } else { "▶" };
                if ui
                    .button(play_pause)
                    .on_hover_text("Play/Pause Animation")
                    .clicked()
                {
                    events.push(AnimPlayerEvent::PlayPause);
                }
                if ui
                    .add_enabled(!transport.is_next_disabled(), Button::new("⏭"))
                    .on_hover_text("Next key frame")
                    .clicked()
                {
                    events.push(AnimPlayerEvent::NextKeyFrame);
                }
                if ui
                    .add_enabled(!transport.is_stop_disabled(), Button::new("⏹"))
                    .on_hover_text("Stop Animation")
                    .clicked()
                {
                    events.push(AnimPlayerEvent::Stop);
                }

                ui.separator();
                ui.label(RichText::new(transport.formatted_time()).monospace());
                ui.add(
                    ProgressBar::new(transport.progress_percent() as f32 / 100.0)
                        .desired_width(250.0),
                );
            });
        });

    if !open {
        events.push(AnimPlayerEvent::Closed);
    }
    events
}

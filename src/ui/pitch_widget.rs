use crate::renderer::pitch_renderer::{draw_elements, draw_pitch, hit_radius, PitchTransform};
use crate::types::diagram::Diagram;
use crate::types::element::Point;
use eframe::egui;
use std::collections::HashMap;

/// Canvas state that persists between frames.
#[derive(Default)]
pub struct EditorState {
    pub selected: Option<String>,
    pub drag: Option<DragState>,
}

#[derive(Debug, Clone)]
pub struct DragState {
    pub element_id: String,
    /// Pointer offset from the element anchor at drag start, in diagram
    /// units, so the element does not jump under the cursor.
    pub grab_offset: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PitchEvent {
    ElementSelected(String),
    /// Emitted once when a drag ends, with the final anchor.
    ElementMoved { id: String, pos: Point },
    BackgroundClicked,
}

/// Editable pitch canvas: draws the diagram and lets the user drag
/// elements around.
pub struct PitchWidget<'a> {
    diagram: &'a mut Diagram,
    state: &'a mut EditorState,
}

impl<'a> PitchWidget<'a> {
    pub fn new(diagram: &'a mut Diagram, state: &'a mut EditorState) -> Self {
        Self { diagram, state }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Vec<PitchEvent> {
        let mut events = Vec::new();
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let transform = PitchTransform::fit(&self.diagram.pitch, response.rect);

        draw_pitch(&painter, &transform, &self.diagram.pitch);
        draw_elements(
            &painter,
            &transform,
            self.diagram,
            None,
            self.state.selected.as_deref(),
        );

        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                match hit_test(self.diagram, &transform, pointer) {
                    Some(id) => {
                        let anchor = self.diagram.element(&id).map(|e| e.pos).unwrap_or_default();
                        let at = transform.to_diagram(pointer);
                        self.state.drag = Some(DragState {
                            element_id: id.clone(),
                            grab_offset: Point::new(at.x - anchor.x, at.y - anchor.y),
                        });
                        self.state.selected = Some(id.clone());
                        events.push(PitchEvent::ElementSelected(id));
                    }
                    None => {
                        self.state.selected = None;
                        events.push(PitchEvent::BackgroundClicked);
                    }
                }
            }
        }

        if response.dragged() {
            if let Some(drag) = self.state.drag.clone() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let at = transform.to_diagram(pointer);
                    let pos = self.diagram.pitch.clamp(Point::new(
                        at.x - drag.grab_offset.x,
                        at.y - drag.grab_offset.y,
                    ));
                    if let Some(element) = self.diagram.element_mut(&drag.element_id) {
                        element.pos = pos;
                    }
                }
            }
        }

        if response.drag_stopped() {
            if let Some(drag) = self.state.drag.take() {
                if let Some(element) = self.diagram.element(&drag.element_id) {
                    events.push(PitchEvent::ElementMoved {
                        id: drag.element_id,
                        pos: element.pos,
                    });
                }
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                match hit_test(self.diagram, &transform, pointer) {
                    Some(id) => {
                        self.state.selected = Some(id.clone());
                        events.push(PitchEvent::ElementSelected(id));
                    }
                    None => {
                        self.state.selected = None;
                        events.push(PitchEvent::BackgroundClicked);
                    }
                }
            }
        }

        events
    }
}

/// Read-only canvas used while an animation session is open: the same
/// drawing path with the sampled pose overriding element anchors.
pub fn show_preview(ui: &mut egui::Ui, diagram: &Diagram, pose: Option<&HashMap<String, Point>>) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let transform = PitchTransform::fit(&diagram.pitch, response.rect);
    draw_pitch(&painter, &transform, &diagram.pitch);
    draw_elements(&painter, &transform, diagram, pose, None);
}

/// Topmost element under the pointer, if any.
fn hit_test(diagram: &Diagram, transform: &PitchTransform, pointer: egui::Pos2) -> Option<String> {
    for element in diagram.elements.iter().rev() {
        let center = transform.to_screen(element.pos);
        if center.distance(pointer) <= hit_radius(element, transform) {
            return Some(element.id.clone());
        }
    }
    None
}

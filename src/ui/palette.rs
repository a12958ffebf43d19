use crate::types::diagram::Diagram;
use crate::types::element::{ElementKind, ExtrasKind, PitchElement, Point};
use eframe::egui;

const HOME_COLOR: [u8; 3] = [0x1e, 0x5a, 0xc8];
const AWAY_COLOR: [u8; 3] = [0xc8, 0x32, 0x32];

/// Side panel with one button per element kind. New elements land near
/// the centre spot, fanned out so they do not stack exactly.
pub fn palette_panel(ui: &mut egui::Ui, diagram: &mut Diagram) {
    ui.heading("Elements");
    ui.separator();

    let spawn = spawn_point(diagram);
    let mut added: Option<PitchElement> = None;

    if ui.button("Ball").clicked() {
        added = Some(PitchElement::ball(spawn));
    }
    if ui.button("Player (home)").clicked() {
        added = Some(PitchElement::player(spawn, next_number(diagram), HOME_COLOR));
    }
    if ui.button("Player (away)").clicked() {
        added = Some(PitchElement::player(spawn, next_number(diagram), AWAY_COLOR));
    }
    if ui.button("Square").clicked() {
        added = Some(PitchElement::square(spawn));
    }
    if ui.button("Ellipse").clicked() {
        added = Some(PitchElement::ellipse(spawn));
    }
    if ui.button("Line").clicked() {
        added = Some(PitchElement::line(spawn, Point::new(120.0, 0.0)));
    }
    if ui.button("Text").clicked() {
        added = Some(PitchElement::text(spawn, "Text"));
    }
    if ui.button("Player run").clicked() {
        added = Some(PitchElement::path(
            ElementKind::PathPlayer,
            spawn,
            vec![Point::new(80.0, -40.0), Point::new(160.0, 0.0)],
        ));
    }
    if ui.button("Ball path").clicked() {
        added = Some(PitchElement::path(
            ElementKind::PathBall,
            spawn,
            vec![Point::new(160.0, 0.0)],
        ));
    }

    ui.separator();
    ui.label("Extras");
    for kind in ExtrasKind::ALL {
        if ui.button(kind.spec().name).clicked() {
            added = Some(PitchElement::extras(kind, spawn));
        }
    }

    if let Some(element) = added {
        log::debug!("added {:?} element {}", element.kind, element.id);
        diagram.add_element(element);
    }
}

fn spawn_point(diagram: &Diagram) -> Point {
    let centre = diagram.pitch.center();
    let offset = (diagram.elements.len() % 8) as f32 * 25.0;
    diagram
        .pitch
        .clamp(Point::new(centre.x + offset, centre.y + offset))
}

fn next_number(diagram: &Diagram) -> String {
    let players = diagram
        .elements
        .iter()
        .filter(|e| e.kind == ElementKind::Player)
        .count();
    (players + 1).to_string()
}

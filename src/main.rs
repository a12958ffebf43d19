mod ops;
mod player;
mod renderer;
mod types;
mod ui;

use crate::types::diagram::Diagram;
use crate::types::element::{ElementKind, ExtrasKind, PitchElement, Point};
use crate::ui::app::PitchApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let diagram = demo_diagram();
    log::info!(
        "starting with demo diagram: {} elements, {} key frames",
        diagram.elements.len(),
        diagram.key_frame_count()
    );

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Pitchboard",
        native_options,
        Box::new(|_cc| Ok(Box::new(PitchApp::new(diagram)))),
    )
}

/// A small passing drill so the app opens with something animatable.
fn demo_diagram() -> Diagram {
    let mut diagram = Diagram::new("Wing switch drill");
    let centre = diagram.pitch.center();

    diagram.add_element(PitchElement::extras(
        ExtrasKind::Goal,
        Point::new(50.0, centre.y),
    ));
    diagram.add_element(PitchElement::extras(
        ExtrasKind::GoalSmall,
        Point::new(diagram.pitch.length - 40.0, centre.y),
    ));
    diagram.add_element(PitchElement::extras(ExtrasKind::Cone, Point::new(650.0, 150.0)));

    let ball = diagram.add_element(PitchElement::ball(centre));
    let seven = diagram.add_element(PitchElement::player(
        Point::new(420.0, 200.0),
        "7",
        [0x1e, 0x5a, 0xc8],
    ));
    let nine = diagram.add_element(PitchElement::player(
        Point::new(420.0, 480.0),
        "9",
        [0x1e, 0x5a, 0xc8],
    ));
    diagram.add_element(PitchElement::player(
        Point::new(620.0, 340.0),
        "5",
        [0xc8, 0x32, 0x32],
    ));
    diagram.add_element(PitchElement::path(
        ElementKind::PathPlayer,
        Point::new(420.0, 200.0),
        vec![Point::new(180.0, -60.0)],
    ));

    // three key frames: kickoff, switch to the right wing, cross
    diagram.capture_key_frame();

    move_element(&mut diagram, &ball, Point::new(700.0, 220.0));
    move_element(&mut diagram, &seven, Point::new(680.0, 180.0));
    move_element(&mut diagram, &nine, Point::new(520.0, 420.0));
    diagram.capture_key_frame();

    move_element(&mut diagram, &ball, Point::new(880.0, 340.0));
    move_element(&mut diagram, &seven, Point::new(760.0, 240.0));
    move_element(&mut diagram, &nine, Point::new(840.0, 400.0));
    diagram.capture_key_frame();

    diagram
}

fn move_element(diagram: &mut Diagram, id: &str, pos: Point) {
    if let Some(element) = diagram.element_mut(id) {
        element.pos = pos;
    }
}

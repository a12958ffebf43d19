use crate::types::diagram::{Diagram, PitchSettings};
use crate::types::element::{ElementKind, ExtrasKind, PitchElement, Point};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind};
use std::collections::HashMap;

const GRASS: Color32 = Color32::from_rgb(0x3a, 0x7d, 0x44);
const LINE_COLOR: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xe8);

const CENTRE_CIRCLE_RADIUS: f32 = 91.5;
const PENALTY_AREA_DEPTH: f32 = 165.0;
const PENALTY_AREA_HALF_WIDTH: f32 = 201.6;
const GOAL_AREA_DEPTH: f32 = 55.0;
const GOAL_AREA_HALF_WIDTH: f32 = 91.5;
const PENALTY_SPOT_DISTANCE: f32 = 110.0;

/// Diagram -> screen mapping that letterboxes the pitch into the
/// available rect.
pub struct PitchTransform {
    origin: Pos2,
    scale: f32,
}

impl PitchTransform {
    pub fn fit(pitch: &PitchSettings, avail: Rect) -> Self {
        let margin = 20.0;
        let scale_x = (avail.width() - 2.0 * margin) / pitch.length;
        let scale_y = (avail.height() - 2.0 * margin) / pitch.width;
        let scale = scale_x.min(scale_y).max(0.01);
        let origin = Pos2::new(
            avail.center().x - pitch.length * scale / 2.0,
            avail.center().y - pitch.width * scale / 2.0,
        );
        PitchTransform { origin, scale }
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + p.x * self.scale,
            self.origin.y + p.y * self.scale,
        )
    }

    pub fn to_diagram(&self, p: Pos2) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.scale,
            (p.y - self.origin.y) / self.scale,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Screen-space pick radius for an element.
pub fn hit_radius(element: &PitchElement, transform: &PitchTransform) -> f32 {
    let base = element.size.x.max(element.size.y) * transform.scale() / 2.0;
    base.max(12.0)
}

pub fn draw_pitch(painter: &egui::Painter, transform: &PitchTransform, pitch: &PitchSettings) {
    let line = Stroke::new(1.5, LINE_COLOR);
    let field = Rect::from_min_max(
        transform.to_screen(Point::new(0.0, 0.0)),
        transform.to_screen(Point::new(pitch.length, pitch.width)),
    );
    painter.rect_filled(field.expand(12.0), 0.0, GRASS);
    painter.rect_stroke(field, 0.0, line, StrokeKind::Middle);

    let top_mid = transform.to_screen(Point::new(pitch.length / 2.0, 0.0));
    let bottom_mid = transform.to_screen(Point::new(pitch.length / 2.0, pitch.width));
    painter.line_segment([top_mid, bottom_mid], line);
    let centre = transform.to_screen(pitch.center());
    painter.circle_stroke(centre, CENTRE_CIRCLE_RADIUS * transform.scale(), line);
    painter.circle_filled(centre, 2.5, LINE_COLOR);

    for (goal_line_x, dir) in [(0.0, 1.0), (pitch.length, -1.0)] {
        for (depth, half_width) in [
            (PENALTY_AREA_DEPTH, PENALTY_AREA_HALF_WIDTH),
            (GOAL_AREA_DEPTH, GOAL_AREA_HALF_WIDTH),
        ] {
            let a = transform.to_screen(Point::new(goal_line_x, pitch.width / 2.0 - half_width));
            let b = transform.to_screen(Point::new(
                goal_line_x + dir * depth,
                pitch.width / 2.0 + half_width,
            ));
            painter.rect_stroke(Rect::from_two_pos(a, b), 0.0, line, StrokeKind::Middle);
        }
        let spot = transform.to_screen(Point::new(
            goal_line_x + dir * PENALTY_SPOT_DISTANCE,
            pitch.width / 2.0,
        ));
        painter.circle_filled(spot, 2.0, LINE_COLOR);
    }
}

/// Draws every element, at its authored anchor or at the position an
/// animation pose overrides it with.
pub fn draw_elements(
    painter: &egui::Painter,
    transform: &PitchTransform,
    diagram: &Diagram,
    pose: Option<&HashMap<String, Point>>,
    selected: Option<&str>,
) {
    for element in &diagram.elements {
        let pos = pose
            .and_then(|p| p.get(&element.id).copied())
            .unwrap_or(element.pos);
        draw_element(painter, transform, element, pos);
        if selected == Some(element.id.as_str()) {
            let radius = hit_radius(element, transform) + 3.0;
            painter.circle_stroke(
                transform.to_screen(pos),
                radius,
                Stroke::new(1.5, Color32::WHITE),
            );
        }
    }
}

fn color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn draw_element(
    painter: &egui::Painter,
    transform: &PitchTransform,
    element: &PitchElement,
    pos: Point,
) {
    let center = transform.to_screen(pos);
    let scale = transform.scale();
    match element.kind {
        ElementKind::Ball => {
            let radius = element.size.x * scale / 2.0;
            painter.circle_filled(center, radius, Color32::WHITE);
            painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::BLACK));
            painter.circle_filled(center, radius * 0.35, Color32::BLACK);
        }
        ElementKind::Player => {
            let radius = element.size.x * scale / 2.0;
            painter.circle_filled(center, radius, color32(element.color));
            painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::BLACK));
            if !element.label.is_empty() {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    &element.label,
                    FontId::proportional((radius * 1.1).max(9.0)),
                    Color32::WHITE,
                );
            }
        }
        ElementKind::Square => {
            let rect = Rect::from_center_size(
                center,
                egui::vec2(element.size.x * scale, element.size.y * scale),
            );
            painter.rect_filled(rect, 2.0, color32(element.color).gamma_multiply(0.25));
            painter.rect_stroke(
                rect,
                2.0,
                Stroke::new(1.5, color32(element.color)),
                StrokeKind::Middle,
            );
        }
        ElementKind::Ellipse => {
            painter.add(egui::epaint::EllipseShape {
                center,
                radius: egui::vec2(
                    element.size.x * scale / 2.0,
                    element.size.y * scale / 2.0,
                ),
                fill: color32(element.color).gamma_multiply(0.25),
                stroke: Stroke::new(1.5, color32(element.color)),
            });
        }
        ElementKind::Line => {
            let end = element
                .points
                .first()
                .copied()
                .unwrap_or(Point::new(100.0, 0.0));
            let to = transform.to_screen(Point::new(pos.x + end.x, pos.y + end.y));
            painter.arrow(center, to - center, Stroke::new(2.0, color32(element.color)));
        }
        ElementKind::Text => {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                &element.label,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }
        ElementKind::PathPlayer | ElementKind::PathBall => {
            draw_path(painter, transform, element, pos);
        }
        ElementKind::Extras => draw_extras(painter, transform, element, pos),
    }
}

fn draw_path(
    painter: &egui::Painter,
    transform: &PitchTransform,
    element: &PitchElement,
    pos: Point,
) {
    let stroke = Stroke::new(2.0, color32(element.color));
    let mut screen_points = vec![transform.to_screen(pos)];
    screen_points.extend(
        element
            .points
            .iter()
            .map(|p| transform.to_screen(Point::new(pos.x + p.x, pos.y + p.y))),
    );
    if screen_points.len() < 2 {
        return;
    }

    // ball paths render dashed to tell passes from runs
    if element.kind == ElementKind::PathBall {
        painter.extend(egui::Shape::dashed_line(&screen_points, stroke, 8.0, 5.0));
    } else {
        for pair in screen_points.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }
    }

    // arrow head on the final segment
    let tip = screen_points[screen_points.len() - 1];
    let dir = tip - screen_points[screen_points.len() - 2];
    if dir.length() > 1.0 {
        let dir = dir.normalized();
        let perp = egui::vec2(-dir.y, dir.x);
        painter.line_segment([tip, tip - 10.0 * dir + 5.0 * perp], stroke);
        painter.line_segment([tip, tip - 10.0 * dir - 5.0 * perp], stroke);
    }
}

fn draw_extras(
    painter: &egui::Painter,
    transform: &PitchTransform,
    element: &PitchElement,
    pos: Point,
) {
    let Some(kind) = element.extras else {
        return;
    };
    let scale = transform.scale();
    let rect = Rect::from_center_size(
        transform.to_screen(pos),
        egui::vec2(element.size.x * scale, element.size.y * scale),
    );
    let white = Stroke::new(1.5, Color32::WHITE);
    match kind {
        ExtrasKind::Goal | ExtrasKind::GoalSmall => {
            painter.rect_stroke(rect, 0.0, white, StrokeKind::Middle);
            let net_lines = 4;
            for i in 1..net_lines {
                let x = rect.left() + rect.width() * i as f32 / net_lines as f32;
                painter.line_segment(
                    [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                    Stroke::new(0.6, Color32::from_gray(200)),
                );
            }
        }
        ExtrasKind::Ladder => {
            painter.rect_stroke(rect, 0.0, white, StrokeKind::Middle);
            let rungs = 6;
            for i in 1..rungs {
                let y = rect.top() + rect.height() * i as f32 / rungs as f32;
                painter.line_segment(
                    [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                    white,
                );
            }
        }
        ExtrasKind::Cone => {
            let points = vec![
                Pos2::new(rect.center().x, rect.top()),
                Pos2::new(rect.right(), rect.bottom()),
                Pos2::new(rect.left(), rect.bottom()),
            ];
            painter.add(egui::Shape::convex_polygon(
                points,
                Color32::from_rgb(0xff, 0x8c, 0x1a),
                Stroke::new(1.0, Color32::BLACK),
            ));
        }
        ExtrasKind::Flag => {
            let base = Pos2::new(rect.center().x, rect.bottom());
            let top = Pos2::new(rect.center().x, rect.top());
            painter.line_segment([base, top], white);
            let pennant = vec![
                top,
                Pos2::new(top.x + rect.width() * 0.5, top.y + rect.height() * 0.15),
                Pos2::new(top.x, top.y + rect.height() * 0.3),
            ];
            painter.add(egui::Shape::convex_polygon(
                pennant,
                Color32::from_rgb(0xd9, 0x3a, 0x3a),
                Stroke::NONE,
            ));
        }
    }
}

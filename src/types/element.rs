use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point in diagram coordinates. Origin is the top-left corner of the
/// pitch, x runs along the long side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Linear interpolation towards `other`, `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Every drawable element kind the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Ball,
    Player,
    Square,
    Ellipse,
    Line,
    Text,
    PathPlayer,
    PathBall,
    Extras,
}

impl ElementKind {
    /// Stable id prefix for elements of this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ElementKind::Ball => "bl",
            ElementKind::Player => "pl",
            ElementKind::Square => "sq",
            ElementKind::Ellipse => "el",
            ElementKind::Line => "ln",
            ElementKind::Text => "txt",
            ElementKind::PathPlayer => "pp",
            ElementKind::PathBall => "bp",
            ElementKind::Extras => "ex",
        }
    }
}

/// Training equipment placed on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrasKind {
    Goal,
    GoalSmall,
    Ladder,
    Cone,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrasSpec {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
}

/// Default dimensions per extras kind, in diagram units.
pub const EXTRAS_DEFAULTS: [ExtrasSpec; 5] = [
    ExtrasSpec { name: "Goal", width: 100.0, height: 300.0 },
    ExtrasSpec { name: "Small Goal", width: 50.0, height: 150.0 },
    ExtrasSpec { name: "Ladder", width: 150.0, height: 350.0 },
    ExtrasSpec { name: "Cone", width: 70.0, height: 85.0 },
    ExtrasSpec { name: "Flag", width: 130.0, height: 280.0 },
];

impl ExtrasKind {
    pub const ALL: [ExtrasKind; 5] = [
        ExtrasKind::Goal,
        ExtrasKind::GoalSmall,
        ExtrasKind::Ladder,
        ExtrasKind::Cone,
        ExtrasKind::Flag,
    ];

    pub fn spec(&self) -> &'static ExtrasSpec {
        &EXTRAS_DEFAULTS[*self as usize]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchElement {
    pub id: String,
    pub kind: ElementKind,
    /// Anchor position in diagram coordinates. This is the property that
    /// key frames capture and animate.
    pub pos: Point,
    /// Width/height for shapes and extras; diameter for round elements.
    pub size: Point,
    pub color: [u8; 3],
    /// Player number or text content, depending on the kind.
    pub label: String,
    /// Waypoints relative to `pos` (line endpoints and movement paths),
    /// so moving the anchor moves the whole shape.
    pub points: Vec<Point>,
    pub extras: Option<ExtrasKind>,
}

impl PitchElement {
    pub fn new(kind: ElementKind, pos: Point) -> Self {
        PitchElement {
            id: format!("{}-{}", kind.id_prefix(), Uuid::new_v4()),
            kind,
            pos,
            size: Point::new(0.0, 0.0),
            color: [255, 255, 255],
            label: String::new(),
            points: Vec::new(),
            extras: None,
        }
    }

    pub fn ball(pos: Point) -> Self {
        let mut element = Self::new(ElementKind::Ball, pos);
        element.size = Point::new(22.0, 22.0);
        element
    }

    pub fn player(pos: Point, label: impl Into<String>, color: [u8; 3]) -> Self {
        let mut element = Self::new(ElementKind::Player, pos);
        element.size = Point::new(40.0, 40.0);
        element.label = label.into();
        element.color = color;
        element
    }

    pub fn square(pos: Point) -> Self {
        let mut element = Self::new(ElementKind::Square, pos);
        element.size = Point::new(140.0, 90.0);
        element.color = [255, 214, 10];
        element
    }

    pub fn ellipse(pos: Point) -> Self {
        let mut element = Self::new(ElementKind::Ellipse, pos);
        element.size = Point::new(140.0, 90.0);
        element.color = [255, 214, 10];
        element
    }

    pub fn line(pos: Point, end: Point) -> Self {
        let mut element = Self::new(ElementKind::Line, pos);
        element.points = vec![end];
        element
    }

    pub fn text(pos: Point, text: impl Into<String>) -> Self {
        let mut element = Self::new(ElementKind::Text, pos);
        element.label = text.into();
        element
    }

    /// Movement path for a player or the ball. `kind` must be one of the
    /// path kinds; waypoints are relative to `pos`.
    pub fn path(kind: ElementKind, pos: Point, points: Vec<Point>) -> Self {
        let mut element = Self::new(kind, pos);
        element.points = points;
        element
    }

    pub fn extras(kind: ExtrasKind, pos: Point) -> Self {
        let spec = kind.spec();
        let mut element = Self::new(ElementKind::Extras, pos);
        element.size = Point::new(spec.width, spec.height);
        element.extras = Some(kind);
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_prefixes_are_stable_and_distinct() {
        let kinds = [
            (ElementKind::Ball, "bl"),
            (ElementKind::Player, "pl"),
            (ElementKind::Square, "sq"),
            (ElementKind::Ellipse, "el"),
            (ElementKind::Line, "ln"),
            (ElementKind::Text, "txt"),
            (ElementKind::PathPlayer, "pp"),
            (ElementKind::PathBall, "bp"),
            (ElementKind::Extras, "ex"),
        ];
        for (kind, prefix) in kinds {
            assert_eq!(kind.id_prefix(), prefix);
        }
        let mut prefixes: Vec<&str> = kinds.iter().map(|(k, _)| k.id_prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), kinds.len());
    }

    #[test]
    fn test_element_ids_carry_kind_prefix() {
        let ball = PitchElement::ball(Point::new(0.0, 0.0));
        assert!(ball.id.starts_with("bl-"));
        let goal = PitchElement::extras(ExtrasKind::Goal, Point::new(0.0, 0.0));
        assert!(goal.id.starts_with("ex-"));
        let other = PitchElement::ball(Point::new(0.0, 0.0));
        assert_ne!(ball.id, other.id);
    }

    #[test]
    fn test_extras_defaults_table() {
        assert_eq!(ExtrasKind::Goal.spec().name, "Goal");
        assert_eq!(ExtrasKind::Goal.spec().width, 100.0);
        assert_eq!(ExtrasKind::Goal.spec().height, 300.0);
        assert_eq!(ExtrasKind::GoalSmall.spec().name, "Small Goal");
        assert_eq!(ExtrasKind::GoalSmall.spec().width, 50.0);
        assert_eq!(ExtrasKind::Ladder.spec().height, 350.0);
        assert_eq!(ExtrasKind::Cone.spec().width, 70.0);
        assert_eq!(ExtrasKind::Cone.spec().height, 85.0);
        assert_eq!(ExtrasKind::Flag.spec().name, "Flag");
        assert_eq!(ExtrasKind::Flag.spec().height, 280.0);
    }

    #[test]
    fn test_extras_element_takes_default_size() {
        let cone = PitchElement::extras(ExtrasKind::Cone, Point::new(10.0, 20.0));
        assert_eq!(cone.size.x, 70.0);
        assert_eq!(cone.size.y, 85.0);
        assert_eq!(cone.extras, Some(ExtrasKind::Cone));
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 100.0);
        let b = Point::new(10.0, 200.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.x, 5.0);
        assert_eq!(mid.y, 150.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

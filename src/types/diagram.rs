use crate::types::element::{PitchElement, Point};
use crate::types::keyframe::KeyFrame;
use serde::{Deserialize, Serialize};

/// Pitch dimensions in diagram units (a full-size pitch at 10 units per
/// meter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchSettings {
    pub length: f32,
    pub width: f32,
}

impl Default for PitchSettings {
    fn default() -> Self {
        PitchSettings {
            length: 1050.0,
            width: 680.0,
        }
    }
}

impl PitchSettings {
    pub fn center(&self) -> Point {
        Point::new(self.length / 2.0, self.width / 2.0)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.length), p.y.clamp(0.0, self.width))
    }
}

/// A drill diagram: the elements on the pitch plus the key frames that
/// animate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    pub name: String,
    pub pitch: PitchSettings,
    pub elements: Vec<PitchElement>,
    pub key_frames: Vec<KeyFrame>,
    /// Seconds between consecutive key frames.
    pub key_frame_duration: f64,
}

impl Diagram {
    pub fn new(name: impl Into<String>) -> Self {
        Diagram {
            name: name.into(),
            pitch: PitchSettings::default(),
            elements: Vec::new(),
            key_frames: Vec::new(),
            key_frame_duration: 1.0,
        }
    }

    pub fn key_frame_count(&self) -> usize {
        self.key_frames.len()
    }

    pub fn add_element(&mut self, element: PitchElement) -> String {
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    /// Removes the element and scrubs it from every key frame. Returns
    /// whether anything was removed.
    pub fn remove_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.elements.len() == before {
            return false;
        }
        for key_frame in &mut self.key_frames {
            key_frame.positions.remove(id);
        }
        true
    }

    pub fn element(&self, id: &str) -> Option<&PitchElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut PitchElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Snapshots every element's current anchor as a new key frame and
    /// returns the new key frame count.
    pub fn capture_key_frame(&mut self) -> usize {
        let mut key_frame = KeyFrame::new();
        for element in &self.elements {
            key_frame.positions.insert(element.id.clone(), element.pos);
        }
        self.key_frames.push(key_frame);
        self.key_frames.len()
    }

    pub fn clear_key_frames(&mut self) {
        self.key_frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::element::ExtrasKind;

    #[test]
    fn test_capture_key_frame_snapshots_positions() {
        let mut diagram = Diagram::new("test");
        let ball = diagram.add_element(PitchElement::ball(Point::new(100.0, 200.0)));
        let player =
            diagram.add_element(PitchElement::player(Point::new(300.0, 400.0), "7", [200, 30, 30]));

        assert_eq!(diagram.capture_key_frame(), 1);

        diagram.element_mut(&ball).unwrap().pos = Point::new(150.0, 250.0);
        assert_eq!(diagram.capture_key_frame(), 2);

        let first = &diagram.key_frames[0];
        assert_eq!(first.position_of(&ball), Some(Point::new(100.0, 200.0)));
        assert_eq!(first.position_of(&player), Some(Point::new(300.0, 400.0)));
        let second = &diagram.key_frames[1];
        assert_eq!(second.position_of(&ball), Some(Point::new(150.0, 250.0)));
        assert_eq!(second.position_of(&player), Some(Point::new(300.0, 400.0)));
    }

    #[test]
    fn test_remove_element_scrubs_key_frames() {
        let mut diagram = Diagram::new("test");
        let ball = diagram.add_element(PitchElement::ball(Point::new(10.0, 10.0)));
        let goal = diagram.add_element(PitchElement::extras(ExtrasKind::Goal, Point::new(0.0, 340.0)));
        diagram.capture_key_frame();

        assert!(diagram.remove_element(&ball));
        assert!(!diagram.remove_element(&ball));
        assert_eq!(diagram.elements.len(), 1);
        assert_eq!(diagram.key_frames[0].position_of(&ball), None);
        assert!(diagram.key_frames[0].position_of(&goal).is_some());
    }

    #[test]
    fn test_clear_key_frames() {
        let mut diagram = Diagram::new("test");
        diagram.add_element(PitchElement::ball(Point::new(10.0, 10.0)));
        diagram.capture_key_frame();
        diagram.capture_key_frame();
        assert_eq!(diagram.key_frame_count(), 2);
        diagram.clear_key_frames();
        assert_eq!(diagram.key_frame_count(), 0);
    }

    #[test]
    fn test_pitch_clamp() {
        let pitch = PitchSettings::default();
        let clamped = pitch.clamp(Point::new(-10.0, 9999.0));
        assert_eq!(clamped, Point::new(0.0, 680.0));
    }
}

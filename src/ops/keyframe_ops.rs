use crate::types::diagram::Diagram;
use crate::types::element::Point;
use std::collections::HashMap;

/// Floors `time_ms` to the nearest lower multiple of the key frame
/// duration. Guards against a zero or negative duration.
pub fn align_to_grid(time_ms: f64, key_frame_duration_ms: f64) -> f64 {
    if key_frame_duration_ms <= 0.0 {
        return 0.0;
    }
    (time_ms / key_frame_duration_ms).floor() * key_frame_duration_ms
}

/// Interpolated anchor positions for every element at `time_ms`.
///
/// Returns `None` when the diagram has no key frames. With a single key
/// frame the pose is that frame's positions, constant in time. Elements
/// missing from a key frame fall back to their authored anchor.
pub fn sample_pose(diagram: &Diagram, time_ms: f64) -> Option<HashMap<String, Point>> {
    if diagram.key_frames.is_empty() {
        return None;
    }

    let duration_ms = diagram.key_frame_duration * 1000.0;
    let last = diagram.key_frames.len() - 1;

    let (index, frac) = if last == 0 || duration_ms <= 0.0 {
        (0, 0.0)
    } else {
        let time = time_ms.clamp(0.0, last as f64 * duration_ms);
        let index = ((time / duration_ms).floor() as usize).min(last - 1);
        let frac = (time - index as f64 * duration_ms) / duration_ms;
        (index, frac)
    };

    let from = &diagram.key_frames[index];
    let to = &diagram.key_frames[(index + 1).min(last)];

    let mut pose = HashMap::with_capacity(diagram.elements.len());
    for element in &diagram.elements {
        let a = from.position_of(&element.id).unwrap_or(element.pos);
        let b = to.position_of(&element.id).unwrap_or(element.pos);
        pose.insert(element.id.clone(), a.lerp(b, frac as f32));
    }
    Some(pose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::element::PitchElement;

    fn two_frame_diagram() -> (Diagram, String) {
        let mut diagram = Diagram::new("test");
        diagram.key_frame_duration = 1.0;
        let ball = diagram.add_element(PitchElement::ball(Point::new(0.0, 0.0)));
        diagram.capture_key_frame();
        diagram.element_mut(&ball).unwrap().pos = Point::new(100.0, 50.0);
        diagram.capture_key_frame();
        (diagram, ball)
    }

    #[test]
    fn test_align_to_grid() {
        assert_eq!(align_to_grid(1700.0, 1000.0), 1000.0);
        assert_eq!(align_to_grid(2000.0, 1000.0), 2000.0);
        assert_eq!(align_to_grid(999.9, 1000.0), 0.0);
    }

    #[test]
    fn test_align_to_grid_guards_zero_duration() {
        assert_eq!(align_to_grid(1234.0, 0.0), 0.0);
        assert_eq!(align_to_grid(1234.0, -5.0), 0.0);
    }

    #[test]
    fn test_sample_pose_at_key_frame_boundaries() {
        let (diagram, ball) = two_frame_diagram();
        let start = sample_pose(&diagram, 0.0).unwrap();
        assert_eq!(start[&ball], Point::new(0.0, 0.0));
        let end = sample_pose(&diagram, 1000.0).unwrap();
        assert_eq!(end[&ball], Point::new(100.0, 50.0));
    }

    #[test]
    fn test_sample_pose_interpolates_between_frames() {
        let (diagram, ball) = two_frame_diagram();
        let pose = sample_pose(&diagram, 500.0).unwrap();
        assert_eq!(pose[&ball], Point::new(50.0, 25.0));
    }

    #[test]
    fn test_sample_pose_clamps_out_of_range_times() {
        let (diagram, ball) = two_frame_diagram();
        let before = sample_pose(&diagram, -250.0).unwrap();
        assert_eq!(before[&ball], Point::new(0.0, 0.0));
        let after = sample_pose(&diagram, 9000.0).unwrap();
        assert_eq!(after[&ball], Point::new(100.0, 50.0));
    }

    #[test]
    fn test_sample_pose_without_key_frames() {
        let mut diagram = Diagram::new("test");
        diagram.add_element(PitchElement::ball(Point::new(0.0, 0.0)));
        assert!(sample_pose(&diagram, 0.0).is_none());
    }

    #[test]
    fn test_sample_pose_single_key_frame_is_constant() {
        let mut diagram = Diagram::new("test");
        let ball = diagram.add_element(PitchElement::ball(Point::new(30.0, 40.0)));
        diagram.capture_key_frame();
        for time in [0.0, 500.0, 10_000.0] {
            let pose = sample_pose(&diagram, time).unwrap();
            assert_eq!(pose[&ball], Point::new(30.0, 40.0));
        }
    }

    #[test]
    fn test_sample_pose_falls_back_for_missing_elements() {
        let (mut diagram, _ball) = two_frame_diagram();
        // added after the key frames were captured
        let late = diagram.add_element(PitchElement::ball(Point::new(7.0, 8.0)));
        let pose = sample_pose(&diagram, 500.0).unwrap();
        assert_eq!(pose[&late], Point::new(7.0, 8.0));
    }
}

use crate::types::element::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A captured pose: element id -> anchor position at this key frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyFrame {
    pub positions: HashMap<String, Point>,
}

impl KeyFrame {
    pub fn new() -> Self {
        KeyFrame {
            positions: HashMap::new(),
        }
    }

    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }
}

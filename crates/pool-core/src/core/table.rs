use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed table geometry for the life of a session.
/// Loaded from JSON for custom tables, or `Default` for the standard one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Playing surface width in world units.
    pub width: f32,
    /// Playing surface height in world units.
    pub height: f32,
    /// Capture radius around each pocket center.
    pub pocket_radius: f32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            pocket_radius: 25.0,
        }
    }
}

impl Table {
    /// Parse a table description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The six pocket centers: four corners plus the midpoints of the two
    /// long (top and bottom) rails.
    pub fn pocket_positions(&self) -> [Vec2; 6] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(self.width / 2.0, 0.0),
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width / 2.0, self.height),
            Vec2::new(self.width, self.height),
        ]
    }

    /// Index of the pocket capturing `pos`, if `pos` lies strictly inside
    /// some pocket's capture radius.
    pub fn pocket_at(&self, pos: Vec2) -> Option<usize> {
        self.pocket_positions()
            .iter()
            .position(|center| center.distance(pos) < self.pocket_radius)
    }
}

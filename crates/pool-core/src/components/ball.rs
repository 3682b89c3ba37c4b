//! Ball data: categories, colors, and the initial rack layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::BallId;
use crate::core::table::Table;

/// Radius shared by every ball in the standard set.
pub const BALL_RADIUS: f32 = 10.0;

/// Spacing between neighboring rack positions (ball diameter plus a gap).
const RACK_SPACING: f32 = 22.0;
const RACK_COLS: u32 = 3;

/// Ball category: the cue ball, solids 1-4, stripes 5-7, and the black 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    Cue,
    Solid,
    Stripe,
    Black,
}

/// A single ball on (or gone from) the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    /// Center position in table coordinates.
    pub pos: Vec2,
    /// Velocity in distance per frame.
    pub vel: Vec2,
    /// Constant for the life of the ball.
    pub radius: f32,
    pub kind: BallKind,
    /// Visible number; `None` for the cue ball.
    pub number: Option<u8>,
    /// Display color, linear RGB. Inert to the simulation.
    pub color: [f32; 3],
    /// Terminal once true: a potted ball leaves the simulation for good.
    pub potted: bool,
}

impl Ball {
    pub fn new(id: BallId, pos: Vec2, kind: BallKind, number: Option<u8>, color: [f32; 3]) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            kind,
            number,
            color,
            potted: false,
        }
    }

    /// Whether the ball still carries velocity. Rest snapping guarantees
    /// settled balls report false exactly.
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }
}

/// Object ball colors 1-8, classic palette (8 is the black).
const OBJECT_COLORS: [[f32; 3]; 8] = [
    [1.0, 1.0, 0.0],       // 1 yellow
    [0.0, 0.0, 1.0],       // 2 blue
    [1.0, 0.0, 0.0],       // 3 red
    [0.5, 0.0, 0.5],       // 4 purple
    [1.0, 0.647, 0.0],     // 5 orange
    [0.0, 0.502, 0.0],     // 6 green
    [0.545, 0.271, 0.075], // 7 brown
    [0.0, 0.0, 0.0],       // 8 black
];

/// Build the session ball set: the cue ball a quarter of the way in on the
/// table midline, and eight object balls racked three-wide around a rack
/// anchor at three quarters width. Ball `i` (0-based) is solid for `i < 4`,
/// the black for `i == 7`, striped otherwise.
pub fn standard_rack(table: &Table) -> Vec<Ball> {
    let mid_y = table.height / 2.0;
    let cue_x = table.width / 4.0;
    let rack_x = table.width * 0.75;

    let mut balls = Vec::with_capacity(9);
    balls.push(Ball::new(
        BallId(0),
        Vec2::new(cue_x, mid_y),
        BallKind::Cue,
        None,
        [1.0, 1.0, 1.0],
    ));

    for i in 0..8u32 {
        let row = (i / RACK_COLS) as f32;
        let col = (i % RACK_COLS) as f32;
        let kind = match i {
            7 => BallKind::Black,
            0..=3 => BallKind::Solid,
            _ => BallKind::Stripe,
        };
        balls.push(Ball::new(
            BallId(i + 1),
            Vec2::new(rack_x + row * RACK_SPACING, mid_y + (col - 1.0) * RACK_SPACING),
            kind,
            Some((i + 1) as u8),
            OBJECT_COLORS[i as usize],
        ));
    }

    balls
}

//! The shot/turn controller: a small state machine over the ball set.
//!
//! Idle until a press starts a drag, Aiming while the drag is live, and
//! release resolves atomically — apply the shot to the cue ball, flip the
//! active player, reset the aim. There is no gating on the table being at
//! rest: a player may start aiming while balls are still rolling. That
//! permissiveness is deliberate; the controller stays small and the turn
//! cycle can never wedge.

use glam::Vec2;

use crate::api::types::Player;
use crate::components::ball::{Ball, BallKind};

/// Velocity applied per unit of power when the shot releases.
pub const SHOT_FORCE: f32 = 15.0;
/// Power saturates here no matter how far the drag extends.
pub const MAX_POWER: f32 = 2.0;
/// Drag distance in world units per unit of power.
pub const POWER_DRAG_SCALE: f32 = 100.0;

/// Snapshot of the in-progress aim, read by renderers to draw the guide
/// line from the cue ball (length `power * 100`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimVector {
    /// Radians, from the cue ball toward the pointer.
    pub angle: f32,
    /// In `[0, MAX_POWER]`.
    pub power: f32,
}

#[derive(Debug, Clone)]
pub struct ShotController {
    aiming: bool,
    drag_start: Vec2,
    angle: f32,
    power: f32,
}

impl ShotController {
    pub fn new() -> Self {
        Self {
            aiming: false,
            drag_start: Vec2::ZERO,
            angle: 0.0,
            power: 0.0,
        }
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    /// The current aim, populated only while a drag is live.
    pub fn aim(&self) -> Option<AimVector> {
        self.aiming.then(|| AimVector {
            angle: self.angle,
            power: self.power,
        })
    }

    /// Press gesture: record the drag origin and enter Aiming.
    pub fn begin_aim(&mut self, pos: Vec2) {
        self.aiming = true;
        self.drag_start = pos;
    }

    /// Drag gesture: recompute angle (cue ball → pointer) and power
    /// (drag distance, saturating). No-op while Idle, and no-op when the
    /// cue ball is gone — there is no respotting rule.
    pub fn update_aim(&mut self, pos: Vec2, balls: &[Ball]) {
        if !self.aiming {
            return;
        }
        let Some(cue) = live_cue(balls) else {
            return;
        };
        self.angle = (pos.y - cue.pos.y).atan2(pos.x - cue.pos.x);
        self.power = (pos.distance(self.drag_start) / POWER_DRAG_SCALE).min(MAX_POWER);
    }

    /// Release gesture: overwrite the cue ball's velocity from the aim,
    /// flip the active player, and reset to Idle. The turn passes even when
    /// no cue ball was found (the shot is wasted, never an error).
    /// Returns whether a velocity was applied.
    pub fn release_shot(&mut self, balls: &mut [Ball], current_player: &mut Player) -> bool {
        if !self.aiming {
            return false;
        }

        let applied = if let Some(cue) = live_cue_mut(balls) {
            let force = self.power * SHOT_FORCE;
            cue.vel = Vec2::new(self.angle.cos() * force, self.angle.sin() * force);
            log::debug!(
                "shot released: angle={:.3} power={:.2} velocity={:?}",
                self.angle,
                self.power,
                cue.vel
            );
            true
        } else {
            false
        };

        *current_player = current_player.other();
        self.aiming = false;
        self.drag_start = Vec2::ZERO;
        self.angle = 0.0;
        self.power = 0.0;
        applied
    }
}

impl Default for ShotController {
    fn default() -> Self {
        Self::new()
    }
}

fn live_cue(balls: &[Ball]) -> Option<&Ball> {
    balls.iter().find(|b| b.kind == BallKind::Cue && !b.potted)
}

fn live_cue_mut(balls: &mut [Ball]) -> Option<&mut Ball> {
    balls
        .iter_mut()
        .find(|b| b.kind == BallKind::Cue && !b.potted)
}

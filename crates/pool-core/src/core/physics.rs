//! The per-frame simulation step.
//!
//! Velocities are in distance per frame and the timestep is one frame; no
//! wall-clock delta enters the integration, so motion speed tracks the host's
//! frame cadence by construction. Balls do not interact with each other —
//! only with the rails and the pockets.
//!
//! The order inside a step is load-bearing: integrate, resolve rails, check
//! pockets, apply friction, snap to rest. A ball can bounce off a rail and
//! still drop in the same frame when its clamped position lands inside a
//! pocket's capture radius.

use glam::Vec2;

use crate::api::types::BallId;
use crate::components::ball::Ball;
use crate::core::table::Table;

/// Fraction of speed retained after a rail bounce.
pub const WALL_RESTITUTION: f32 = 0.8;
/// Per-frame multiplicative velocity decay from the felt.
pub const FELT_FRICTION: f32 = 0.99;
/// Component speed below which a ball snaps to exact rest.
pub const REST_THRESHOLD: f32 = 0.1;

/// Advance one ball by one frame. Returns the capturing pocket index when
/// the ball pots; the potting frame leaves `pos` at its pre-step value.
fn step_ball(ball: &mut Ball, table: &Table) -> Option<usize> {
    let mut next = ball.pos + ball.vel;

    // Rail reflection, each axis independently; a corner hit triggers both.
    // The ball edge (center ± radius) is what may not leave the table.
    if next.x <= ball.radius || next.x >= table.width - ball.radius {
        ball.vel.x = -ball.vel.x * WALL_RESTITUTION;
        next.x = next.x.clamp(ball.radius, table.width - ball.radius);
    }
    if next.y <= ball.radius || next.y >= table.height - ball.radius {
        ball.vel.y = -ball.vel.y * WALL_RESTITUTION;
        next.y = next.y.clamp(ball.radius, table.height - ball.radius);
    }

    // Pocket capture is checked against the rail-resolved tentative position.
    if let Some(pocket) = table.pocket_at(next) {
        ball.potted = true;
        return Some(pocket);
    }

    ball.vel *= FELT_FRICTION;
    if ball.vel.x.abs() < REST_THRESHOLD && ball.vel.y.abs() < REST_THRESHOLD {
        ball.vel = Vec2::ZERO;
    }

    ball.pos = next;
    None
}

/// Advance every live ball one frame. Potted balls are skipped entirely.
/// Returns `(ball, pocket)` for each ball captured this frame.
pub fn step_balls(balls: &mut [Ball], table: &Table) -> Vec<(BallId, usize)> {
    let mut potted = Vec::new();
    for ball in balls.iter_mut() {
        if ball.potted {
            continue;
        }
        if let Some(pocket) = step_ball(ball, table) {
            potted.push((ball.id, pocket));
        }
    }
    potted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ball::BallKind;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(BallId(1), pos, BallKind::Solid, Some(1), [1.0, 0.0, 0.0]);
        ball.vel = vel;
        ball
    }

    #[test]
    fn integrates_position_by_velocity() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(400.0, 200.0), Vec2::new(5.0, -3.0))];
        step_balls(&mut balls, &table);
        assert_eq!(balls[0].pos, Vec2::new(405.0, 197.0));
    }

    #[test]
    fn friction_decays_velocity_each_frame() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(400.0, 200.0), Vec2::new(15.0, 0.0))];
        step_balls(&mut balls, &table);
        assert!((balls[0].vel.x - 15.0 * FELT_FRICTION).abs() < 1e-5);
        assert_eq!(balls[0].vel.y, 0.0);
    }

    #[test]
    fn rail_bounce_reflects_and_clamps() {
        let table = Table::default();
        // One frame from the right rail: 795 + 10 = 805, past 790
        let mut balls = vec![ball_at(Vec2::new(795.0, 200.0), Vec2::new(10.0, 0.0))];
        step_balls(&mut balls, &table);

        // Position lands exactly one radius off the rail
        assert!((balls[0].pos.x - 790.0).abs() < 1e-5);
        // Velocity reflected at the restitution factor, then friction applies
        let expected = -10.0 * WALL_RESTITUTION * FELT_FRICTION;
        assert!((balls[0].vel.x - expected).abs() < 1e-5);
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        // A clamped corner position sits ~14 units from the corner pocket,
        // so shrink the capture radius to observe the pure double bounce.
        let table = Table {
            pocket_radius: 5.0,
            ..Table::default()
        };
        let mut balls = vec![ball_at(Vec2::new(785.0, 330.0), Vec2::new(10.0, 65.0))];
        step_balls(&mut balls, &table);

        assert!(balls[0].vel.x < 0.0, "x should reflect: {:?}", balls[0].vel);
        assert!(balls[0].vel.y < 0.0, "y should reflect: {:?}", balls[0].vel);
        assert!((balls[0].pos.x - 790.0).abs() < 1e-5);
        assert!((balls[0].pos.y - 390.0).abs() < 1e-5);
    }

    #[test]
    fn pocket_capture_pots_and_freezes_position() {
        let table = Table::default();
        // Rolling into the top-middle pocket at (400, 0)
        let start = Vec2::new(400.0, 40.0);
        let mut balls = vec![ball_at(start, Vec2::new(0.0, -20.0))];
        let potted = step_balls(&mut balls, &table);

        assert_eq!(potted, vec![(BallId(1), 1)]);
        assert!(balls[0].potted);
        // The potting frame does not commit the move
        assert_eq!(balls[0].pos, start);
    }

    #[test]
    fn only_qualifying_balls_pot() {
        let table = Table::default();
        let mut balls = vec![
            ball_at(Vec2::new(400.0, 40.0), Vec2::new(0.0, -20.0)),
            ball_at(Vec2::new(400.0, 200.0), Vec2::new(2.0, 0.0)),
        ];
        balls[1].id = BallId(2);
        let potted = step_balls(&mut balls, &table);
        assert_eq!(potted.len(), 1);
        assert!(balls[0].potted);
        assert!(!balls[1].potted);
    }

    #[test]
    fn potted_is_terminal() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0))];
        balls[0].potted = true;

        let before = balls[0].clone();
        for _ in 0..10 {
            let potted = step_balls(&mut balls, &table);
            assert!(potted.is_empty());
        }
        assert_eq!(balls[0].pos, before.pos);
        assert_eq!(balls[0].vel, before.vel);
        assert!(balls[0].potted);
    }

    #[test]
    fn slow_ball_snaps_to_rest() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(400.0, 200.0), Vec2::new(0.05, -0.09))];
        step_balls(&mut balls, &table);
        assert_eq!(balls[0].vel, Vec2::ZERO);
    }

    #[test]
    fn rest_is_idempotent() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(400.0, 200.0), Vec2::ZERO)];
        for _ in 0..100 {
            step_balls(&mut balls, &table);
        }
        assert_eq!(balls[0].pos, Vec2::new(400.0, 200.0));
        assert_eq!(balls[0].vel, Vec2::ZERO);
    }

    #[test]
    fn radius_never_changes() {
        let table = Table::default();
        let mut balls = vec![ball_at(Vec2::new(300.0, 200.0), Vec2::new(12.0, -7.0))];
        let radius = balls[0].radius;
        for _ in 0..500 {
            step_balls(&mut balls, &table);
        }
        assert_eq!(balls[0].radius, radius);
    }

    #[test]
    fn balls_pass_through_each_other() {
        let table = Table::default();
        let mut balls = vec![
            ball_at(Vec2::new(390.0, 200.0), Vec2::new(5.0, 0.0)),
            ball_at(Vec2::new(410.0, 200.0), Vec2::new(-5.0, 0.0)),
        ];
        balls[1].id = BallId(2);
        // Head-on; with no ball-ball response they swap sides unharmed
        for _ in 0..10 {
            step_balls(&mut balls, &table);
        }
        assert!(balls[0].pos.x > balls[1].pos.x);
        assert!(balls[0].vel.x > 0.0);
        assert!(balls[1].vel.x < 0.0);
    }
}

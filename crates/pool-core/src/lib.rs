//! Headless two-player pool simulation.
//!
//! The crate owns the authoritative game state (balls, table, turn/score
//! round) and advances it one frame at a time. Rendering and input capture
//! are the host's job: the host feeds pointer gestures into an [`InputQueue`]
//! and reads ball positions and the aim guide back out each frame.

pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::session::{GameRound, PoolSession, Score};
pub use api::types::{BallId, Player, SessionEvent};
pub use components::ball::{standard_rack, Ball, BallKind, BALL_RADIUS};
pub use core::physics::{step_balls, FELT_FRICTION, REST_THRESHOLD, WALL_RESTITUTION};
pub use core::table::Table;
pub use core::time::FrameClock;
pub use input::queue::{InputQueue, PointerEvent};
pub use systems::shot::{AimVector, ShotController, MAX_POWER, POWER_DRAG_SCALE, SHOT_FORCE};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{Player, SessionEvent};
use crate::components::ball::{standard_rack, Ball};
use crate::core::physics::step_balls;
use crate::core::table::Table;
use crate::input::queue::{InputQueue, PointerEvent};
use crate::systems::shot::{AimVector, ShotController};

/// Turn and score bookkeeping for a two-player round.
///
/// `game_over` and `winner` are carried in the state but nothing in the core
/// sets them; win detection belongs to rule logic the core does not implement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRound {
    pub current_player: Player,
    pub score: Score,
    pub game_over: bool,
    pub winner: Option<Player>,
}

impl Default for GameRound {
    fn default() -> Self {
        Self {
            current_player: Player::One,
            score: Score::default(),
            game_over: false,
            winner: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Score {
    pub player_one: u32,
    pub player_two: u32,
}

/// The owned simulation session: ball set, table geometry, round state, and
/// the shot controller. There is exactly one writer — every mutation goes
/// through `&mut self`, so a multi-threaded host serializes access behind a
/// single lock or actor and keeps the sequential model intact.
pub struct PoolSession {
    table: Table,
    balls: Vec<Ball>,
    round: GameRound,
    shot: ShotController,
    events: Vec<SessionEvent>,
}

impl PoolSession {
    /// A session on the standard 800×400 table.
    pub fn new() -> Self {
        Self::with_table(Table::default())
    }

    /// A session on custom geometry; the rack scales with the table.
    pub fn with_table(table: Table) -> Self {
        let balls = standard_rack(&table);
        Self {
            table,
            balls,
            round: GameRound::default(),
            shot: ShotController::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation one frame. Call once per rendered frame (or
    /// per [`FrameClock`](crate::core::time::FrameClock) frame).
    pub fn step(&mut self) {
        for (ball, pocket) in step_balls(&mut self.balls, &self.table) {
            log::info!("ball {} potted into pocket {}", ball.0, pocket);
            self.events.push(SessionEvent::BallPotted { ball, pocket });
        }
    }

    /// Drain the host's pointer events and run them through the shot
    /// controller. Both `Up` and `Leave` resolve the shot.
    pub fn handle_input(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            match event {
                PointerEvent::Down { x, y } => self.begin_aim(Vec2::new(x, y)),
                PointerEvent::Move { x, y } => self.update_aim(Vec2::new(x, y)),
                PointerEvent::Up { .. } | PointerEvent::Leave => self.release_shot(),
            }
        }
    }

    pub fn begin_aim(&mut self, pos: Vec2) {
        self.shot.begin_aim(pos);
    }

    pub fn update_aim(&mut self, pos: Vec2) {
        self.shot.update_aim(pos, &self.balls);
    }

    /// Resolve a live aim: shoot the cue ball (when present), pass the turn,
    /// reset the aim. No-op when not aiming.
    pub fn release_shot(&mut self) {
        if !self.shot.is_aiming() {
            return;
        }
        let applied = self
            .shot
            .release_shot(&mut self.balls, &mut self.round.current_player);
        if !applied {
            log::info!("shot released with no cue ball on the table; turn passes");
        }
        self.events.push(SessionEvent::TurnChanged {
            player: self.round.current_player,
        });
    }

    // -- read surface for renderers and hosts --

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Every ball, potted or not, in creation order (cue ball first).
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// The balls still in play, in creation order.
    pub fn live_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| !b.potted)
    }

    /// The in-progress aim, if a drag is live.
    pub fn aim(&self) -> Option<AimVector> {
        self.shot.aim()
    }

    /// True once every live ball has snapped to rest.
    pub fn all_at_rest(&self) -> bool {
        self.live_balls().all(|b| !b.is_moving())
    }

    /// Take the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for PoolSession {
    fn default() -> Self {
        Self::new()
    }
}

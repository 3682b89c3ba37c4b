use serde::{Deserialize, Serialize};

/// Unique identifier for a ball. `BallId(0)` is reserved for the cue ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BallId(pub u32);

/// One of the two players in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A state change the host may want to react to (sounds, HUD updates).
/// Collected by the session each frame and drained by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A ball fell into a pocket this frame.
    BallPotted { ball: BallId, pocket: usize },
    /// A shot was released; the turn now belongs to `player`.
    TurnChanged { player: Player },
}

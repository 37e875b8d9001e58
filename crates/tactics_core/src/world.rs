//! Per-cycle world snapshot
//!
//! The world model that builds these values lives outside this crate; the
//! snapshot is the read-only view the tactical core works from.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Number of players per team, and the highest roster slot.
pub const TEAM_SIZE: u8 = 11;

/// Team side as reported by the simulation server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    #[default]
    Neutral,
}

/// Play mode of the referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum GameModeType {
    #[default]
    BeforeKickOff,
    TimeOver,
    PlayOn,
    KickOff,
    KickIn,
    FreeKick,
    CornerKick,
    GoalKick,
    AfterGoal,
    OffSide,
    PenaltyKick,
    FirstHalfOver,
    Pause,
    Human,
    FoulCharge,
    FoulPush,
    FoulMultipleAttack,
    FoulBallOut,
    BackPass,
    FreeKickFault,
    CatchFault,
    IndFreeKick,
    PenaltySetup,
    PenaltyReady,
    PenaltyTaken,
    PenaltyMiss,
    PenaltyScore,
    IllegalDefense,
    PenaltyOnfield,
    PenaltyFoul,
    GoalieCatch,
    ExtendHalf,
}

impl GameModeType {
    pub fn is_play_on(self) -> bool {
        matches!(self, GameModeType::PlayOn)
    }

    /// Kickoff restarts: everybody has to stand in their own half.
    pub fn is_restart_kickoff(self) -> bool {
        matches!(self, GameModeType::BeforeKickOff | GameModeType::AfterGoal)
    }

    pub fn is_kick_in_or_corner(self) -> bool {
        matches!(self, GameModeType::KickIn | GameModeType::CornerKick)
    }

    pub fn is_goal_kick_or_goalie_catch(self) -> bool {
        matches!(self, GameModeType::GoalKick | GameModeType::GoalieCatch)
    }
}

/// Play mode plus the side it favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameMode {
    #[serde(rename = "type")]
    pub kind: GameModeType,
    #[serde(default)]
    pub side: Side,
}

impl GameMode {
    pub fn new(kind: GameModeType, side: Side) -> Self {
        Self { kind, side }
    }

    pub fn is_ours(&self, our_side: Side) -> bool {
        self.side == our_side
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec2,
    #[serde(default = "Vec2::zeros")]
    pub velocity: Vec2,
}

impl Default for BallState {
    fn default() -> Self {
        Self { position: Vec2::zeros(), velocity: Vec2::zeros() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelfState {
    pub uniform_number: u8,
    #[serde(default)]
    pub is_goalie: bool,
    #[serde(default = "Vec2::zeros")]
    pub position: Vec2,
}

impl Default for SelfState {
    fn default() -> Self {
        Self { uniform_number: 1, is_goalie: false, position: Vec2::zeros() }
    }
}

/// Estimated cycles for each party to reach the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InterceptTable {
    pub self_reach_steps: u32,
    pub first_teammate_reach_steps: u32,
    pub first_opponent_reach_steps: u32,
}

impl InterceptTable {
    pub fn new(self_steps: u32, teammate_steps: u32, opponent_steps: u32) -> Self {
        Self {
            self_reach_steps: self_steps,
            first_teammate_reach_steps: teammate_steps,
            first_opponent_reach_steps: opponent_steps,
        }
    }

    /// Fastest reach of anybody on the pitch.
    pub fn all_min(&self) -> u32 {
        self.first_teammate_reach_steps
            .min(self.first_opponent_reach_steps)
            .min(self.self_reach_steps)
    }

    /// Fastest reach of our team, self included.
    pub fn our_min(&self) -> u32 {
        self.first_teammate_reach_steps.min(self.self_reach_steps)
    }
}

/// Read-only view of the match for one agent in one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub cycle: u64,
    pub ball: BallState,
    pub game_mode: GameMode,
    pub our_side: Side,
    #[serde(rename = "self")]
    pub me: SelfState,
    pub intercept: InterceptTable,
    pub offside_line_x: f32,
    /// Penalty shoot-out in progress (set by the world model).
    #[serde(default)]
    pub penalty_kick_mode: bool,
}

impl WorldSnapshot {
    pub fn is_our_game_mode(&self) -> bool {
        self.game_mode.is_ours(self.our_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intercept_minimums() {
        let table = InterceptTable::new(4, 3, 5);
        assert_eq!(table.all_min(), 3);
        assert_eq!(table.our_min(), 3);

        let table = InterceptTable::new(6, 5, 3);
        assert_eq!(table.all_min(), 3);
        assert_eq!(table.our_min(), 5);
    }

    #[test]
    fn test_restart_kickoff_modes() {
        assert!(GameModeType::BeforeKickOff.is_restart_kickoff());
        assert!(GameModeType::AfterGoal.is_restart_kickoff());
        assert!(!GameModeType::KickOff.is_restart_kickoff());
        assert!(!GameModeType::PlayOn.is_restart_kickoff());
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "ball": { "position": [10.0, -3.0], "velocity": [0.5, 0.0] },
            "game_mode": { "type": "kick_in", "side": "left" },
            "our_side": "left",
            "self": { "uniform_number": 7 },
            "intercept": {
                "self_reach_steps": 4,
                "first_teammate_reach_steps": 3,
                "first_opponent_reach_steps": 5
            },
            "offside_line_x": 20.0
        }"#;

        let snap: WorldSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.ball.position, Vec2::new(10.0, -3.0));
        assert_eq!(snap.game_mode.kind, GameModeType::KickIn);
        assert!(snap.is_our_game_mode());
        assert_eq!(snap.me.uniform_number, 7);
        assert!(!snap.me.is_goalie);
        assert!(!snap.penalty_kick_mode);
    }
}

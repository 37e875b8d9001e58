//! Position solving with legality clamps
//!
//! The selected definition is fed the predicted ball point, its table is read
//! back, and every x is capped:
//! - kickoff restarts: `kickoff_x_limit` (-0.5)
//! - otherwise: `offside_line_x - offside_margin`

use crate::config::PositioningConfig;
use crate::formation::{FormationDefinition, PositionTable};
use crate::geometry::Vec2;
use crate::world::WorldSnapshot;

#[derive(Debug, Clone)]
pub struct PositionSolver {
    kickoff_x_limit: f32,
    offside_margin: f32,
}

impl Default for PositionSolver {
    fn default() -> Self {
        Self::from_config(&PositioningConfig::default())
    }
}

impl PositionSolver {
    pub fn from_config(config: &PositioningConfig) -> Self {
        Self { kickoff_x_limit: config.kickoff_x_limit, offside_margin: config.offside_margin }
    }

    /// Highest x any target may have this cycle.
    pub fn legality_bound(&self, snapshot: &WorldSnapshot) -> f32 {
        if snapshot.game_mode.kind.is_restart_kickoff() {
            self.kickoff_x_limit
        } else {
            snapshot.offside_line_x - self.offside_margin
        }
    }

    pub fn solve(
        &self,
        definition: &mut dyn FormationDefinition,
        predicted_ball: Vec2,
        snapshot: &WorldSnapshot,
    ) -> PositionTable {
        definition.update(predicted_ball);
        let mut table = definition.poses();
        table.clamp_x_max(self.legality_bound(snapshot));
        table
    }
}

//! Tactical situation classification
//!
//! Exactly one [`Situation`] holds per cycle. Evaluation order:
//! 1. Play on → Offense or Defense by reach-time race
//! 2. Penalty kick → PenaltyKick
//! 3. Restart for our side → OurSetPlay
//! 4. Anything else → OppSetPlay

use serde::{Deserialize, Serialize};

use crate::config::PositioningConfig;
use crate::geometry::{inertia_n_step_point, Vec2};
use crate::world::{GameModeType, WorldSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    OurSetPlay,
    OppSetPlay,
    Defense,
    Offense,
    PenaltyKick,
}

impl Situation {
    pub fn is_set_play(self) -> bool {
        matches!(self, Situation::OurSetPlay | Situation::OppSetPlay)
    }
}

/// Classifier output: the situation and the ball point it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub situation: Situation,
    pub predicted_ball: Vec2,
}

#[derive(Debug, Clone)]
pub struct SituationClassifier {
    ball_decay: f32,
    forward_roster_threshold: u8,
    attacking_half_x: f32,
}

impl Default for SituationClassifier {
    fn default() -> Self {
        Self::from_config(&PositioningConfig::default())
    }
}

impl SituationClassifier {
    pub fn from_config(config: &PositioningConfig) -> Self {
        Self {
            ball_decay: config.ball_decay,
            forward_roster_threshold: config.forward_roster_threshold,
            attacking_half_x: config.attacking_half_x,
        }
    }

    pub fn ball_decay(&self) -> f32 {
        self.ball_decay
    }

    /// Where the ball will be when the fastest player on the pitch gets there.
    pub fn predict_ball(&self, snapshot: &WorldSnapshot) -> Vec2 {
        inertia_n_step_point(
            snapshot.ball.position,
            snapshot.ball.velocity,
            snapshot.intercept.all_min(),
            self.ball_decay,
        )
    }

    /// Extra steps our side may lose the reach race by and still count as attacking.
    pub fn offense_threshold(&self, predicted_ball: Vec2, uniform_number: u8) -> u32 {
        let mut thr = 0;
        if predicted_ball.x > self.attacking_half_x {
            thr += 1;
        }
        if uniform_number > self.forward_roster_threshold {
            thr += 1;
        }
        thr
    }

    pub fn classify(&self, snapshot: &WorldSnapshot) -> Classification {
        let predicted_ball = self.predict_ball(snapshot);
        let mode = snapshot.game_mode.kind;

        let situation = if mode.is_play_on() {
            let thr = self.offense_threshold(predicted_ball, snapshot.me.uniform_number);
            let intercept = &snapshot.intercept;
            if intercept.our_min() < intercept.first_opponent_reach_steps.saturating_add(thr) {
                Situation::Offense
            } else {
                Situation::Defense
            }
        } else if mode == GameModeType::PenaltyKick {
            Situation::PenaltyKick
        } else if snapshot.is_our_game_mode() {
            Situation::OurSetPlay
        } else {
            Situation::OppSetPlay
        };

        Classification { situation, predicted_ball }
    }
}

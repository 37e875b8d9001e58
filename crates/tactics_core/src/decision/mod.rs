//! Decision Dispatcher - one behavior per agent per cycle
//!
//! ## Evaluation Order (first match wins)
//! 1. Designated goalie → goalie strategy
//! 2. Play on → open-play strategy
//! 3. Penalty shoot-out → penalty strategy
//! 4. Anything else → set-play strategy
//!
//! Each branch is a [`DecisionStrategy`]; the dispatcher only routes and
//! pushes the single action the strategy returns.

pub mod action;
pub mod strategies;

pub use action::{ActionQueue, ActionRequest};
pub use strategies::{BasicPenaltyStrategy, BasicPlayOnStrategy, BasicSetPlayStrategy, GoalieStrategy};

use log::trace;
use serde::Serialize;

use crate::session::TacticalSession;
use crate::world::WorldSnapshot;

/// What a strategy may look at when deciding.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub snapshot: &'a WorldSnapshot,
    pub tactics: &'a TacticalSession,
}

impl<'a> DecisionContext<'a> {
    pub fn new(snapshot: &'a WorldSnapshot, tactics: &'a TacticalSession) -> Self {
        Self { snapshot, tactics }
    }
}

/// Decide for this agent.
pub trait DecisionStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> ActionRequest;
}

/// Which strategy handled the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBranch {
    Goalie,
    PlayOn,
    Penalty,
    SetPlay,
}

/// Branch counters (for QA/debugging)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub goalie: u64,
    pub play_on: u64,
    pub penalty: u64,
    pub set_play: u64,
}

impl DispatchStats {
    fn record(&mut self, branch: DecisionBranch) {
        match branch {
            DecisionBranch::Goalie => self.goalie += 1,
            DecisionBranch::PlayOn => self.play_on += 1,
            DecisionBranch::Penalty => self.penalty += 1,
            DecisionBranch::SetPlay => self.set_play += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.goalie + self.play_on + self.penalty + self.set_play
    }
}

pub struct DecisionDispatcher {
    goalie: Box<dyn DecisionStrategy>,
    play_on: Box<dyn DecisionStrategy>,
    penalty: Box<dyn DecisionStrategy>,
    set_play: Box<dyn DecisionStrategy>,
    stats: DispatchStats,
}

impl Default for DecisionDispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DecisionDispatcher {
    pub fn new(
        goalie: Box<dyn DecisionStrategy>,
        play_on: Box<dyn DecisionStrategy>,
        penalty: Box<dyn DecisionStrategy>,
        set_play: Box<dyn DecisionStrategy>,
    ) -> Self {
        Self { goalie, play_on, penalty, set_play, stats: DispatchStats::default() }
    }

    /// Dispatcher wired with the basic strategies.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(GoalieStrategy),
            Box::new(BasicPlayOnStrategy),
            Box::new(BasicPenaltyStrategy),
            Box::new(BasicSetPlayStrategy),
        )
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// Branch this snapshot routes to.
    pub fn branch(snapshot: &WorldSnapshot) -> DecisionBranch {
        if snapshot.me.is_goalie {
            DecisionBranch::Goalie
        } else if snapshot.game_mode.kind.is_play_on() {
            DecisionBranch::PlayOn
        } else if snapshot.penalty_kick_mode {
            DecisionBranch::Penalty
        } else {
            DecisionBranch::SetPlay
        }
    }

    /// Push exactly one action for this cycle onto `queue`.
    pub fn make_decision(
        &mut self,
        ctx: &DecisionContext<'_>,
        queue: &mut ActionQueue,
    ) -> DecisionBranch {
        let branch = Self::branch(ctx.snapshot);
        let strategy = match branch {
            DecisionBranch::Goalie => &self.goalie,
            DecisionBranch::PlayOn => &self.play_on,
            DecisionBranch::Penalty => &self.penalty,
            DecisionBranch::SetPlay => &self.set_play,
        };

        let action = strategy.decide(ctx);
        trace!("cycle {}: {:?} → {}", ctx.snapshot.cycle, branch, action.label());
        queue.push(action);
        self.stats.record(branch);
        branch
    }
}

impl std::fmt::Debug for DecisionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionDispatcher").field("stats", &self.stats).finish()
    }
}

//! One agent's per-cycle loop: tactics first, then exactly one decision.

use serde::Serialize;

use crate::decision::{
    ActionQueue, ActionRequest, DecisionBranch, DecisionContext, DecisionDispatcher,
};
use crate::formation::{FormationContext, FormationSetName, PositionTable};
use crate::geometry::Vec2;
use crate::session::TacticalSession;
use crate::situation::Situation;
use crate::world::WorldSnapshot;

/// Everything decided in one cycle, ready to print or hand to teammates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub formation_set: FormationSetName,
    pub situation: Situation,
    pub formation: FormationContext,
    pub carried_over: bool,
    pub predicted_ball: Vec2,
    pub branch: DecisionBranch,
    pub action: ActionRequest,
    pub offside_line: f32,
    pub positions: PositionTable,
}

#[derive(Debug)]
pub struct Agent {
    tactics: TacticalSession,
    dispatcher: DecisionDispatcher,
    actions: ActionQueue,
}

impl Agent {
    pub fn new(tactics: TacticalSession, dispatcher: DecisionDispatcher) -> Self {
        Self { tactics, dispatcher, actions: ActionQueue::new() }
    }

    pub fn tactics(&self) -> &TacticalSession {
        &self.tactics
    }

    pub fn dispatcher(&self) -> &DecisionDispatcher {
        &self.dispatcher
    }

    pub fn actions(&self) -> &ActionQueue {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionQueue {
        &mut self.actions
    }

    /// Run one cycle. The queue holds only this cycle's action afterwards.
    pub fn run_cycle(&mut self, snapshot: &WorldSnapshot) -> CycleReport {
        self.actions.clear();
        let summary = self.tactics.update(snapshot);

        let ctx = DecisionContext::new(snapshot, &self.tactics);
        let branch = self.dispatcher.make_decision(&ctx, &mut self.actions);
        let action = self.actions.last().cloned().unwrap_or(ActionRequest::Hold);

        CycleReport {
            cycle: snapshot.cycle,
            formation_set: summary.set,
            situation: summary.situation,
            formation: summary.transition.context(),
            carried_over: summary.transition.is_carry_over(),
            predicted_ball: summary.predicted_ball,
            branch,
            action,
            offside_line: self.tactics.offside_line(),
            positions: self.tactics.positions().clone(),
        }
    }
}

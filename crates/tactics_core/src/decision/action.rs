//! Behavior action requests emitted by the decision layer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::role::RoleType;

/// One requested behavior for the agent this cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRequest {
    /// Hand control to the goalkeeper behavior.
    Goalie,
    /// Run to a formation target.
    MoveTo { target: Vec2, role: RoleType },
    /// Go for the ball at the predicted reach point.
    Intercept { point: Vec2 },
    /// Take our restart kick toward `target`.
    SetPlayKick { target: Vec2 },
    /// Penalty shoot-out behavior; `ours` when we are kicking.
    Penalty { ours: bool },
    /// Stay put; issued only when no formation target is available.
    Hold,
}

impl ActionRequest {
    pub fn label(&self) -> &'static str {
        match self {
            ActionRequest::Goalie => "goalie",
            ActionRequest::MoveTo { .. } => "move_to",
            ActionRequest::Intercept { .. } => "intercept",
            ActionRequest::SetPlayKick { .. } => "set_play_kick",
            ActionRequest::Penalty { .. } => "penalty",
            ActionRequest::Hold => "hold",
        }
    }
}

/// Pending actions of one agent, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: VecDeque<ActionRequest>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: ActionRequest) {
        self.pending.push_back(action);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn last(&self) -> Option<&ActionRequest> {
        self.pending.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionRequest> {
        self.pending.iter()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Take everything queued so far.
    pub fn drain(&mut self) -> impl Iterator<Item = ActionRequest> + '_ {
        self.pending.drain(..)
    }
}

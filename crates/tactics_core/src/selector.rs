//! Formation selection
//!
//! Maps (situation, game mode) to one context of the active formation set.
//! Precedence is fixed:
//! 1. Offense → offense
//! 2. Defense → defense
//! 3. Kick-in / corner → kick-in (ours) or set-play (theirs)
//! 4. Goal kick / goalie catch → goalie-kick ours / theirs
//! 5. Before kickoff / after goal → before-kickoff
//! 6. OppSetPlay → set-play (theirs)
//! 7. OurSetPlay → set-play (ours)
//!
//! Nothing matches only for a penalty kick; [`select_formation`] then returns
//! `None` and the caller keeps last cycle's context.

use crate::formation::FormationContext;
use crate::situation::Situation;
use crate::world::{GameMode, Side};

/// Context to switch to, or `None` to keep the previous one.
pub fn select_formation(
    situation: Situation,
    mode: GameMode,
    our_side: Side,
) -> Option<FormationContext> {
    let ours = mode.is_ours(our_side);

    match situation {
        Situation::Offense => return Some(FormationContext::Offense),
        Situation::Defense => return Some(FormationContext::Defense),
        _ => {}
    }

    if mode.kind.is_kick_in_or_corner() {
        return Some(if ours { FormationContext::KickInOur } else { FormationContext::SetPlayOpp });
    }
    if mode.kind.is_goal_kick_or_goalie_catch() {
        return Some(if ours {
            FormationContext::GoalieKickOur
        } else {
            FormationContext::GoalieKickOpp
        });
    }
    if mode.kind.is_restart_kickoff() {
        return Some(FormationContext::BeforeKickOff);
    }

    match situation {
        Situation::OppSetPlay => Some(FormationContext::SetPlayOpp),
        Situation::OurSetPlay => Some(FormationContext::SetPlayOur),
        _ => None,
    }
}

/// Outcome of one selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Switched { from: FormationContext, to: FormationContext },
    Kept(FormationContext),
    /// No rule matched; last cycle's context stays in effect.
    CarriedOver(FormationContext),
}

impl Transition {
    pub fn context(self) -> FormationContext {
        match self {
            Transition::Switched { to, .. } => to,
            Transition::Kept(ctx) | Transition::CarriedOver(ctx) => ctx,
        }
    }

    pub fn is_carry_over(self) -> bool {
        matches!(self, Transition::CarriedOver(_))
    }
}

/// Apply [`select_formation`] on top of the previous context.
pub fn transition(
    previous: FormationContext,
    situation: Situation,
    mode: GameMode,
    our_side: Side,
) -> Transition {
    match select_formation(situation, mode, our_side) {
        Some(next) if next == previous => Transition::Kept(next),
        Some(next) => Transition::Switched { from: previous, to: next },
        None => Transition::CarriedOver(previous),
    }
}

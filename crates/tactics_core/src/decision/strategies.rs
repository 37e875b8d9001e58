//! Basic strategies for the four dispatcher branches.
//!
//! Field players fall back to their formation target whenever they are not the
//! one going for the ball.

use super::{ActionRequest, DecisionContext, DecisionStrategy};
use crate::geometry::{inertia_n_step_point, Vec2, PITCH_HALF_LENGTH};

/// Opponent goal center, the default restart kick target.
fn opponent_goal() -> Vec2 {
    Vec2::new(PITCH_HALF_LENGTH, 0.0)
}

/// Move to this cycle's formation target, or hold if there is none yet.
fn formation_move(ctx: &DecisionContext<'_>) -> ActionRequest {
    let unum = ctx.snapshot.me.uniform_number;
    match (ctx.tactics.position(unum), ctx.tactics.role_type(unum)) {
        (Ok(target), Ok(role)) => ActionRequest::MoveTo { target, role },
        _ => ActionRequest::Hold,
    }
}

/// Ball point at the moment we reach it.
fn own_reach_point(ctx: &DecisionContext<'_>) -> Vec2 {
    let snap = ctx.snapshot;
    inertia_n_step_point(
        snap.ball.position,
        snap.ball.velocity,
        snap.intercept.self_reach_steps,
        ctx.tactics.ball_decay(),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoalieStrategy;

impl DecisionStrategy for GoalieStrategy {
    fn decide(&self, _ctx: &DecisionContext<'_>) -> ActionRequest {
        ActionRequest::Goalie
    }
}

/// Intercept when we are first on our team and no slower than the opponents.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPlayOnStrategy;

impl DecisionStrategy for BasicPlayOnStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> ActionRequest {
        let reach = &ctx.snapshot.intercept;
        let me = reach.self_reach_steps;

        if me <= reach.first_teammate_reach_steps && me <= reach.first_opponent_reach_steps {
            ActionRequest::Intercept { point: own_reach_point(ctx) }
        } else {
            formation_move(ctx)
        }
    }
}

/// On our restart the player nearest the ball kicks; everyone else takes position.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSetPlayStrategy;

impl DecisionStrategy for BasicSetPlayStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> ActionRequest {
        let snap = ctx.snapshot;
        let is_kicker = snap.is_our_game_mode()
            && snap.intercept.self_reach_steps <= snap.intercept.first_teammate_reach_steps;

        if is_kicker {
            ActionRequest::SetPlayKick { target: opponent_goal() }
        } else {
            formation_move(ctx)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPenaltyStrategy;

impl DecisionStrategy for BasicPenaltyStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> ActionRequest {
        ActionRequest::Penalty { ours: ctx.snapshot.is_our_game_mode() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TacticsConfig;
    use crate::formation::test_support::shift_set;
    use crate::formation::{FormationCatalog, FormationSetName};
    use crate::role::RoleType;
    use crate::session::TacticalSession;
    use crate::world::{
        BallState, GameMode, GameModeType, InterceptTable, SelfState, Side, WorldSnapshot,
    };

    fn snapshot(kind: GameModeType, side: Side, reach: InterceptTable) -> WorldSnapshot {
        WorldSnapshot {
            ball: BallState { position: Vec2::new(-10.0, 4.0), velocity: Vec2::new(1.0, 0.0) },
            game_mode: GameMode::new(kind, side),
            our_side: Side::Left,
            me: SelfState { uniform_number: 7, ..SelfState::default() },
            intercept: reach,
            offside_line_x: 30.0,
            ..WorldSnapshot::default()
        }
    }

    fn tactics_after(snap: &WorldSnapshot) -> TacticalSession {
        let catalog = FormationCatalog::from_sets([shift_set(FormationSetName::CyrusBase433)]);
        let mut tactics = TacticalSession::new(catalog, &TacticsConfig::default()).unwrap();
        tactics.update(snap);
        tactics
    }

    #[test]
    fn test_play_on_fastest_intercepts() {
        let snap = snapshot(GameModeType::PlayOn, Side::Neutral, InterceptTable::new(2, 4, 2));
        let tactics = tactics_after(&snap);
        let action = BasicPlayOnStrategy.decide(&DecisionContext::new(&snap, &tactics));

        let expected = inertia_n_step_point(
            snap.ball.position,
            snap.ball.velocity,
            2,
            tactics.ball_decay(),
        );
        assert_eq!(action, ActionRequest::Intercept { point: expected });
    }

    #[test]
    fn test_play_on_teammate_faster_moves_to_formation() {
        let snap = snapshot(GameModeType::PlayOn, Side::Neutral, InterceptTable::new(6, 2, 5));
        let tactics = tactics_after(&snap);
        let action = BasicPlayOnStrategy.decide(&DecisionContext::new(&snap, &tactics));

        assert_eq!(
            action,
            ActionRequest::MoveTo { target: tactics.position(7).unwrap(), role: RoleType::Midfielder }
        );
    }

    #[test]
    fn test_holds_before_first_cycle() {
        let snap = snapshot(GameModeType::PlayOn, Side::Neutral, InterceptTable::new(6, 2, 5));
        let catalog = FormationCatalog::from_sets([shift_set(FormationSetName::CyrusBase433)]);
        let tactics = TacticalSession::new(catalog, &TacticsConfig::default()).unwrap();

        let action = BasicPlayOnStrategy.decide(&DecisionContext::new(&snap, &tactics));
        assert_eq!(action, ActionRequest::Hold);
    }

    #[test]
    fn test_set_play_kicker_and_others() {
        let ours = snapshot(GameModeType::FreeKick, Side::Left, InterceptTable::new(1, 3, 2));
        let tactics = tactics_after(&ours);
        assert_eq!(
            BasicSetPlayStrategy.decide(&DecisionContext::new(&ours, &tactics)),
            ActionRequest::SetPlayKick { target: opponent_goal() }
        );

        // theirs: nobody of ours kicks even if closest
        let theirs = snapshot(GameModeType::FreeKick, Side::Right, InterceptTable::new(1, 3, 2));
        let tactics = tactics_after(&theirs);
        assert!(matches!(
            BasicSetPlayStrategy.decide(&DecisionContext::new(&theirs, &tactics)),
            ActionRequest::MoveTo { .. }
        ));
    }

    #[test]
    fn test_penalty_side() {
        let ours = snapshot(GameModeType::PenaltySetup, Side::Left, InterceptTable::default());
        let theirs = snapshot(GameModeType::PenaltySetup, Side::Right, InterceptTable::default());
        let tactics = tactics_after(&ours);

        assert_eq!(
            BasicPenaltyStrategy.decide(&DecisionContext::new(&ours, &tactics)),
            ActionRequest::Penalty { ours: true }
        );
        assert_eq!(
            BasicPenaltyStrategy.decide(&DecisionContext::new(&theirs, &tactics)),
            ActionRequest::Penalty { ours: false }
        );
    }

    #[test]
    fn test_goalie_always_goalie() {
        let snap = snapshot(GameModeType::CornerKick, Side::Right, InterceptTable::default());
        let tactics = tactics_after(&snap);
        assert_eq!(
            GoalieStrategy.decide(&DecisionContext::new(&snap, &tactics)),
            ActionRequest::Goalie
        );
    }
}

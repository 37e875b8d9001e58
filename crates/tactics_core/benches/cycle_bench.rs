//! Benchmarks for one full tactical cycle.
//!
//! Run with: cargo bench --package tactics_core

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tactics_core::formation::{AnchoredSlot, FormationSet};
use tactics_core::{
    Agent, AnchoredFormation, ConfigError, DecisionDispatcher, FormationCatalog,
    FormationDefinition, FormationSetName, GameMode, GameModeType, InterceptTable,
    RoleDescriptor, RoleSide, RoleType, Side, TacticalSession, TacticsConfig, Vec2,
    WorldSnapshot,
};

/// Flat 4-3-3 with moderate ball attraction.
fn slots() -> Vec<AnchoredSlot> {
    let rows: [(RoleType, f32, &[f32]); 4] = [
        (RoleType::Goalie, -49.0, &[0.0]),
        (RoleType::Defender, -35.0, &[-20.0, -7.0, 7.0, 20.0]),
        (RoleType::Midfielder, -15.0, &[-15.0, 0.0, 15.0]),
        (RoleType::Forward, 5.0, &[-20.0, 0.0, 20.0]),
    ];

    let mut unum = 0u8;
    let mut out = Vec::new();
    for (role_type, x, ys) in rows {
        for &y in ys {
            unum += 1;
            let side = if y < 0.0 {
                RoleSide::Left
            } else if y > 0.0 {
                RoleSide::Right
            } else {
                RoleSide::Center
            };
            out.push(AnchoredSlot {
                unum,
                role: RoleDescriptor::new(format!("{role_type:?}{unum}"), role_type, side, -1),
                anchor: Vec2::new(x, y),
                follow: Vec2::new(0.5, 0.3),
            });
        }
    }
    out
}

fn agent() -> Agent {
    let set = FormationSet::try_build(FormationSetName::CyrusBase433, |ctx| {
        let formation = AnchoredFormation::new(ctx.file_stem(), slots(), Path::new("bench"))?;
        Ok::<Box<dyn FormationDefinition>, ConfigError>(Box::new(formation))
    })
    .expect("bench formation set");
    let catalog = FormationCatalog::from_sets([set]);
    let tactics = TacticalSession::new(catalog, &TacticsConfig::default()).expect("bench session");
    Agent::new(tactics, DecisionDispatcher::with_defaults())
}

fn snapshot(kind: GameModeType, side: Side) -> WorldSnapshot {
    let mut snap = WorldSnapshot {
        game_mode: GameMode::new(kind, side),
        our_side: Side::Left,
        intercept: InterceptTable::new(6, 4, 5),
        offside_line_x: 18.0,
        ..WorldSnapshot::default()
    };
    snap.ball.position = Vec2::new(12.0, -6.0);
    snap.ball.velocity = Vec2::new(1.2, 0.4);
    snap.me.uniform_number = 8;
    snap
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tactical_cycle");

    let cases = [
        ("play_on", GameModeType::PlayOn, Side::Neutral),
        ("kick_in_our", GameModeType::KickIn, Side::Left),
        ("before_kick_off", GameModeType::BeforeKickOff, Side::Neutral),
        ("penalty_kick", GameModeType::PenaltyKick, Side::Right),
    ];

    for (label, kind, side) in cases {
        let snap = snapshot(kind, side);
        let mut agent = agent();

        group.bench_with_input(BenchmarkId::from_parameter(label), &snap, |b, snap| {
            b.iter(|| black_box(agent.run_cycle(black_box(snap))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);

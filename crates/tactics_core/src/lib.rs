//! # tactics_core - Per-cycle Tactical Decision Core
//!
//! Turns one agent's world snapshot into a tactical situation, a formation
//! context, legal target positions for all eleven roster slots and exactly one
//! behavior action.
//!
//! ## Features
//! - Fixed-priority decision dispatch (goalie / play on / penalty / set play)
//! - Reach-race situation classification on the predicted ball point
//! - Closed set of data-driven formation sets loaded once at startup
//! - Kickoff and offside legality clamps on every target

pub mod agent;
pub mod config;
pub mod decision;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod role;
pub mod selector;
pub mod session;
pub mod situation;
pub mod solver;
pub mod world;

pub use agent::{Agent, CycleReport};
pub use config::{PositioningConfig, TacticsConfig};
pub use error::{ConfigError, Result, TacticsError};

// Re-export the decision layer
pub use decision::{
    ActionQueue, ActionRequest, DecisionBranch, DecisionContext, DecisionDispatcher,
    DecisionStrategy,
};

// Re-export the formation pipeline
pub use formation::{
    AnchoredFormation, FormationCatalog, FormationContext, FormationDefinition, FormationSet,
    FormationSetName, PositionTable,
};
pub use selector::{select_formation, Transition};
pub use session::{CycleSummary, FixedSetSelector, FormationSetSelector, TacticalSession};
pub use situation::{Situation, SituationClassifier};
pub use solver::PositionSolver;

pub use geometry::Vec2;
pub use role::{RoleDescriptor, RoleSide, RoleType};
pub use world::{GameMode, GameModeType, InterceptTable, Side, WorldSnapshot};

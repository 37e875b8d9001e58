//! Tactical session
//!
//! Owns everything that survives from one cycle to the next for a single
//! agent: the catalog, the selected formation context and the position
//! table. One [`TacticalSession::update`] per cycle runs
//! set selection → situation → formation selection → position solving.
//! The accessors afterwards answer role and position queries for that cycle.

use log::{debug, warn};

use crate::config::TacticsConfig;
use crate::error::{ConfigError, Result, TacticsError};
use crate::formation::{
    FormationCatalog, FormationContext, FormationDefinition, FormationSetName, PositionTable,
};
use crate::geometry::Vec2;
use crate::role::{RoleDescriptor, RoleSide, RoleType};
use crate::selector::{self, Transition};
use crate::situation::{Situation, SituationClassifier};
use crate::solver::PositionSolver;
use crate::world::WorldSnapshot;

/// Chooses which formation set to play with this cycle.
pub trait FormationSetSelector {
    fn select(&self, snapshot: &WorldSnapshot) -> FormationSetName;
}

/// Always the same set.
#[derive(Debug, Clone, Copy)]
pub struct FixedSetSelector(pub FormationSetName);

impl FormationSetSelector for FixedSetSelector {
    fn select(&self, _snapshot: &WorldSnapshot) -> FormationSetName {
        self.0
    }
}

/// What one cycle decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSummary {
    pub set: FormationSetName,
    pub situation: Situation,
    pub transition: Transition,
    pub predicted_ball: Vec2,
}

pub struct TacticalSession {
    catalog: FormationCatalog,
    set_selector: Box<dyn FormationSetSelector>,
    classifier: SituationClassifier,
    solver: PositionSolver,
    default_set: usize,
    current_set: usize,
    /// Last selection missing from the catalog; warned about once per run of misses
    rejected_set: Option<FormationSetName>,
    situation: Situation,
    context: FormationContext,
    positions: PositionTable,
}

impl TacticalSession {
    /// Session playing `config.active_set`, which must be in `catalog`.
    pub fn new(
        catalog: FormationCatalog,
        config: &TacticsConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let default_set = catalog
            .index_of(config.active_set)
            .ok_or(ConfigError::MissingFormationSet(config.active_set))?;

        Ok(Self {
            catalog,
            set_selector: Box::new(FixedSetSelector(config.active_set)),
            classifier: SituationClassifier::from_config(&config.positioning),
            solver: PositionSolver::from_config(&config.positioning),
            default_set,
            current_set: default_set,
            rejected_set: None,
            situation: Situation::Offense,
            context: FormationContext::Offense,
            positions: PositionTable::new(),
        })
    }

    /// Load the catalog named by `config` and build a session on it.
    pub fn from_config(config: &TacticsConfig) -> std::result::Result<Self, ConfigError> {
        let catalog = FormationCatalog::load(&config.formations_dir, &config.sets_to_load())?;
        Self::new(catalog, config)
    }

    pub fn with_set_selector(mut self, selector: impl FormationSetSelector + 'static) -> Self {
        self.set_selector = Box::new(selector);
        self
    }

    /// Run one cycle.
    pub fn update(&mut self, snapshot: &WorldSnapshot) -> CycleSummary {
        self.current_set = self.resolve_set(snapshot);

        let classification = self.classifier.classify(snapshot);
        self.situation = classification.situation;

        let transition =
            selector::transition(self.context, self.situation, snapshot.game_mode, snapshot.our_side);
        if transition.is_carry_over() {
            debug!(
                "cycle {}: no formation rule for {:?} in {:?}, keeping {}",
                snapshot.cycle, self.situation, snapshot.game_mode.kind, self.context
            );
        }
        self.context = transition.context();

        let definition = self.catalog.set_at_mut(self.current_set).definition_mut(self.context);
        self.positions = self.solver.solve(definition, classification.predicted_ball, snapshot);

        let set = self.catalog.set_at(self.current_set).name();
        debug!(
            "cycle {}: set={} situation={:?} formation={} poses={:?}",
            snapshot.cycle, set, self.situation, self.context, self.positions
        );

        CycleSummary {
            set,
            situation: self.situation,
            transition,
            predicted_ball: classification.predicted_ball,
        }
    }

    fn resolve_set(&mut self, snapshot: &WorldSnapshot) -> usize {
        let wanted = self.set_selector.select(snapshot);
        match self.catalog.index_of(wanted) {
            Some(index) => {
                self.rejected_set = None;
                index
            }
            None => {
                if self.rejected_set == Some(wanted) {
                    debug!("cycle {}: set {} still not loaded", snapshot.cycle, wanted);
                } else {
                    warn!("Formation set {} not loaded, staying with the configured set", wanted);
                    self.rejected_set = Some(wanted);
                }
                self.default_set
            }
        }
    }

    pub fn situation(&self) -> Situation {
        self.situation
    }

    pub fn selected_context(&self) -> FormationContext {
        self.context
    }

    pub fn current_set(&self) -> FormationSetName {
        self.catalog.set_at(self.current_set).name()
    }

    pub fn catalog(&self) -> &FormationCatalog {
        &self.catalog
    }

    pub fn ball_decay(&self) -> f32 {
        self.classifier.ball_decay()
    }

    fn definition(&self) -> &dyn FormationDefinition {
        self.catalog.set_at(self.current_set).definition(self.context)
    }

    // ---- role registry ----

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    pub fn position(&self, unum: u8) -> Result<Vec2> {
        if self.positions.is_empty() {
            return Err(TacticsError::NotReady);
        }
        self.positions.get(unum)
    }

    pub fn role(&self, unum: u8) -> Result<&RoleDescriptor> {
        self.definition().role(unum)
    }

    pub fn role_name(&self, unum: u8) -> Result<&str> {
        self.role(unum).map(|role| role.name.as_str())
    }

    pub fn role_type(&self, unum: u8) -> Result<RoleType> {
        self.role(unum).map(|role| role.role_type)
    }

    pub fn role_side(&self, unum: u8) -> Result<RoleSide> {
        self.role(unum).map(|role| role.side)
    }

    pub fn role_pair(&self, unum: u8) -> Result<i32> {
        self.role(unum).map(|role| role.pair)
    }

    /// Our own defensive line: the second-deepest target x.
    pub fn offside_line(&self) -> f32 {
        self.positions.second_smallest_x()
    }
}

impl std::fmt::Debug for TacticalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TacticalSession")
            .field("current_set", &self.current_set())
            .field("situation", &self.situation)
            .field("context", &self.context)
            .field("positions", &self.positions)
            .finish()
    }
}

//! Formation definitions and formation sets
//!
//! A formation definition maps a predicted ball point to one target position
//! per roster slot and carries the role metadata for each slot. Eight
//! definitions, one per restart/phase context, form a [`FormationSet`].
//!
//! ## Directory layout
//! ```text
//! <formations_dir>/
//!   4-3-3-cyrus-base/
//!     before-kick-off.yaml
//!     defense-formation.yaml
//!     offense-formation.yaml
//!     goalie-kick-opp-formation.yaml
//!     goalie-kick-our-formation.yaml
//!     kickin-our-formation.yaml
//!     setplay-opp-formation.yaml
//!     setplay-our-formation.yaml
//! ```

pub mod anchored;
pub mod catalog;
mod table;

pub use anchored::{AnchoredFormation, AnchoredSlot};
pub use catalog::FormationCatalog;
pub use table::PositionTable;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::Vec2;
use crate::role::RoleDescriptor;

/// Contract every formation definition has to satisfy.
///
/// `update` refreshes the internal ball-relative layout; `poses` reads it
/// back. Implementations must cover roster slots 1..=11 exactly once.
pub trait FormationDefinition: fmt::Debug {
    fn update(&mut self, ball: Vec2);

    fn poses(&self) -> PositionTable;

    fn role(&self, unum: u8) -> Result<&RoleDescriptor>;
}

/// Which of the eight definitions of a set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationContext {
    BeforeKickOff,
    Defense,
    Offense,
    GoalieKickOpp,
    GoalieKickOur,
    KickInOur,
    SetPlayOpp,
    SetPlayOur,
}

impl FormationContext {
    pub const ALL: [FormationContext; 8] = [
        FormationContext::BeforeKickOff,
        FormationContext::Defense,
        FormationContext::Offense,
        FormationContext::GoalieKickOpp,
        FormationContext::GoalieKickOur,
        FormationContext::KickInOur,
        FormationContext::SetPlayOpp,
        FormationContext::SetPlayOur,
    ];

    /// File stem of the context file inside a set directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            FormationContext::BeforeKickOff => "before-kick-off",
            FormationContext::Defense => "defense-formation",
            FormationContext::Offense => "offense-formation",
            FormationContext::GoalieKickOpp => "goalie-kick-opp-formation",
            FormationContext::GoalieKickOur => "goalie-kick-our-formation",
            FormationContext::KickInOur => "kickin-our-formation",
            FormationContext::SetPlayOpp => "setplay-opp-formation",
            FormationContext::SetPlayOur => "setplay-our-formation",
        }
    }
}

impl fmt::Display for FormationContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// The closed set of known formation sets.
///
/// Serialized as its directory name; parsing always goes through [`FromStr`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String", into = "String")]
pub enum FormationSetName {
    Classic433,
    #[default]
    CyrusBase433,
    HeliosBase433,
}

impl FormationSetName {
    pub const ALL: [FormationSetName; 3] = [
        FormationSetName::Classic433,
        FormationSetName::CyrusBase433,
        FormationSetName::HeliosBase433,
    ];

    /// Directory name of the set under the formations root.
    pub fn dir_name(self) -> &'static str {
        match self {
            FormationSetName::Classic433 => "4-3-3",
            FormationSetName::CyrusBase433 => "4-3-3-cyrus-base",
            FormationSetName::HeliosBase433 => "4-3-3-helios-base",
        }
    }
}

impl fmt::Display for FormationSetName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for FormationSetName {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FormationSetName::ALL
            .into_iter()
            .find(|name| name.dir_name() == s)
            .ok_or_else(|| ConfigError::UnknownFormationSet(s.to_string()))
    }
}

impl TryFrom<String> for FormationSetName {
    type Error = ConfigError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormationSetName> for String {
    fn from(name: FormationSetName) -> Self {
        name.dir_name().to_string()
    }
}

type BoxedDefinition = Box<dyn FormationDefinition>;

/// Eight context-specific definitions sharing one name.
#[derive(Debug)]
pub struct FormationSet {
    name: FormationSetName,
    before_kick_off: BoxedDefinition,
    defense: BoxedDefinition,
    offense: BoxedDefinition,
    goalie_kick_opp: BoxedDefinition,
    goalie_kick_our: BoxedDefinition,
    kickin_our: BoxedDefinition,
    setplay_opp: BoxedDefinition,
    setplay_our: BoxedDefinition,
}

impl FormationSet {
    /// Build a set by asking `load` for each context in turn.
    pub fn try_build<E>(
        name: FormationSetName,
        mut load: impl FnMut(FormationContext) -> std::result::Result<BoxedDefinition, E>,
    ) -> std::result::Result<Self, E> {
        Ok(Self {
            name,
            before_kick_off: load(FormationContext::BeforeKickOff)?,
            defense: load(FormationContext::Defense)?,
            offense: load(FormationContext::Offense)?,
            goalie_kick_opp: load(FormationContext::GoalieKickOpp)?,
            goalie_kick_our: load(FormationContext::GoalieKickOur)?,
            kickin_our: load(FormationContext::KickInOur)?,
            setplay_opp: load(FormationContext::SetPlayOpp)?,
            setplay_our: load(FormationContext::SetPlayOur)?,
        })
    }

    pub fn name(&self) -> FormationSetName {
        self.name
    }

    pub fn definition(&self, context: FormationContext) -> &dyn FormationDefinition {
        match context {
            FormationContext::BeforeKickOff => self.before_kick_off.as_ref(),
            FormationContext::Defense => self.defense.as_ref(),
            FormationContext::Offense => self.offense.as_ref(),
            FormationContext::GoalieKickOpp => self.goalie_kick_opp.as_ref(),
            FormationContext::GoalieKickOur => self.goalie_kick_our.as_ref(),
            FormationContext::KickInOur => self.kickin_our.as_ref(),
            FormationContext::SetPlayOpp => self.setplay_opp.as_ref(),
            FormationContext::SetPlayOur => self.setplay_our.as_ref(),
        }
    }

    pub(crate) fn definition_mut(&mut self, context: FormationContext) -> &mut dyn FormationDefinition {
        match context {
            FormationContext::BeforeKickOff => self.before_kick_off.as_mut(),
            FormationContext::Defense => self.defense.as_mut(),
            FormationContext::Offense => self.offense.as_mut(),
            FormationContext::GoalieKickOpp => self.goalie_kick_opp.as_mut(),
            FormationContext::GoalieKickOur => self.goalie_kick_our.as_mut(),
            FormationContext::KickInOur => self.kickin_our.as_mut(),
            FormationContext::SetPlayOpp => self.setplay_opp.as_mut(),
            FormationContext::SetPlayOur => self.setplay_our.as_mut(),
        }
    }
}

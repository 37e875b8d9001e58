//! Role metadata attached to roster slots by a formation definition.

use serde::{Deserialize, Serialize};

/// Pairing id of a role without a partner.
pub const NO_PAIR: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Goalie,
    Defender,
    Midfielder,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSide {
    Left,
    Center,
    Right,
}

/// Static description of the role a formation gives to a roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: RoleType,
    pub side: RoleSide,
    /// Roster slot of the mirrored partner, or [`NO_PAIR`].
    #[serde(default = "default_pair")]
    pub pair: i32,
}

fn default_pair() -> i32 {
    NO_PAIR
}

impl RoleDescriptor {
    pub fn new(name: impl Into<String>, role_type: RoleType, side: RoleSide, pair: i32) -> Self {
        Self { name: name.into(), role_type, side, pair }
    }

    pub fn has_pair(&self) -> bool {
        self.pair != NO_PAIR
    }
}

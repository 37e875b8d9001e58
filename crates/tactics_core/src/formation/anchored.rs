//! Anchor + ball-follow formation definition
//!
//! Each roster slot has a home anchor and a per-axis attraction towards the
//! predicted ball. With the ball at `b` the target is
//! `anchor + (follow.x * b.x, follow.y * b.y)`, kept inside the pitch.
//!
//! ```yaml
//! slots:
//!   - unum: 1
//!     role: { name: Goalie, type: goalie, side: center }
//!     anchor: [-49.0, 0.0]
//!     follow: [0.05, 0.1]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FormationDefinition, PositionTable};
use crate::error::{ConfigError, Result, TacticsError};
use crate::geometry::{clamp_to_pitch, Vec2};
use crate::role::RoleDescriptor;
use crate::world::TEAM_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchoredSlot {
    pub unum: u8,
    pub role: RoleDescriptor,
    pub anchor: Vec2,
    #[serde(default = "Vec2::zeros")]
    pub follow: Vec2,
}

#[derive(Debug, Clone, Deserialize)]
struct AnchoredFormationFile {
    #[serde(default)]
    name: Option<String>,
    slots: Vec<AnchoredSlot>,
}

#[derive(Debug, Clone)]
pub struct AnchoredFormation {
    name: String,
    slots: BTreeMap<u8, AnchoredSlot>,
    poses: PositionTable,
}

impl AnchoredFormation {
    /// Build from slot data, checking that slots 1..=11 each appear once.
    pub fn new(
        name: impl Into<String>,
        slots: Vec<AnchoredSlot>,
        origin: &Path,
    ) -> std::result::Result<Self, ConfigError> {
        validate_slots(&slots, origin)?;

        let slots: BTreeMap<u8, AnchoredSlot> =
            slots.into_iter().map(|slot| (slot.unum, slot)).collect();
        let poses = slots.values().map(|slot| (slot.unum, clamp_to_pitch(slot.anchor))).collect();

        Ok(Self { name: name.into(), slots, poses })
    }

    pub fn from_yaml_str(raw: &str, origin: &Path) -> std::result::Result<Self, ConfigError> {
        let file: AnchoredFormationFile = serde_yaml::from_str(raw)
            .map_err(|source| ConfigError::Yaml { path: origin.to_path_buf(), source })?;

        let name = file.name.unwrap_or_else(|| {
            origin.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        });
        Self::new(name, file.slots, origin)
    }

    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&raw, path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self, unum: u8) -> Result<&AnchoredSlot> {
        self.slots.get(&unum).ok_or(TacticsError::UnknownSlot(unum))
    }
}

fn validate_slots(slots: &[AnchoredSlot], origin: &Path) -> std::result::Result<(), ConfigError> {
    if slots.len() != TEAM_SIZE as usize {
        return Err(ConfigError::invalid_formation(
            origin,
            format!("expected {} slots, found {}", TEAM_SIZE, slots.len()),
        ));
    }

    let mut seen = BTreeSet::new();
    for slot in slots {
        if !(1..=TEAM_SIZE).contains(&slot.unum) {
            return Err(ConfigError::invalid_formation(
                origin,
                format!("roster slot {} outside 1..={}", slot.unum, TEAM_SIZE),
            ));
        }
        if !seen.insert(slot.unum) {
            return Err(ConfigError::invalid_formation(
                origin,
                format!("roster slot {} defined twice", slot.unum),
            ));
        }
        if !slot.anchor.x.is_finite() || !slot.anchor.y.is_finite() {
            return Err(ConfigError::invalid_formation(
                origin,
                format!("roster slot {} has a non-finite anchor", slot.unum),
            ));
        }
    }

    Ok(())
}

impl FormationDefinition for AnchoredFormation {
    fn update(&mut self, ball: Vec2) {
        self.poses = self
            .slots
            .values()
            .map(|slot| (slot.unum, clamp_to_pitch(slot.anchor + slot.follow.component_mul(&ball))))
            .collect();
    }

    fn poses(&self) -> PositionTable {
        self.poses.clone()
    }

    fn role(&self, unum: u8) -> Result<&RoleDescriptor> {
        self.slot(unum).map(|slot| &slot.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::test_support::sample_yaml;
    use crate::geometry::PITCH_HALF_LENGTH;
    use crate::role::{RoleSide, RoleType};

    #[test]
    fn test_load_sample_from_yaml() {
        let formation =
            AnchoredFormation::from_yaml_str(&sample_yaml(), Path::new("sample.yaml")).unwrap();

        assert_eq!(formation.name(), "sample");
        assert_eq!(formation.poses().len(), 11);
        assert_eq!(formation.role(1).unwrap().role_type, RoleType::Goalie);
        assert_eq!(formation.role(11).unwrap().side, RoleSide::Center);
        assert_eq!(formation.role(0), Err(TacticsError::UnknownSlot(0)));
    }

    #[test]
    fn test_update_follows_ball() {
        let mut formation =
            AnchoredFormation::from_yaml_str(&sample_yaml(), Path::new("sample.yaml")).unwrap();

        formation.update(Vec2::new(10.0, 8.0));
        let pos = formation.poses().get(9).unwrap();
        assert!((pos.x - 10.0).abs() < 1e-5); // 5 + 0.5 * 10
        assert!((pos.y - 5.0).abs() < 1e-5); // 3 + 0.25 * 8
    }

    #[test]
    fn test_update_stays_on_pitch() {
        let mut formation =
            AnchoredFormation::from_yaml_str(&sample_yaml(), Path::new("sample.yaml")).unwrap();

        formation.update(Vec2::new(200.0, 0.0));
        for (_, pos) in formation.poses().iter() {
            assert!(pos.x <= PITCH_HALF_LENGTH);
        }
    }

    #[test]
    fn test_rejects_missing_slot() {
        let yaml = sample_yaml();
        let truncated: String = yaml.lines().take(2 + 4 * 10).collect::<Vec<_>>().join("\n");
        let err = AnchoredFormation::from_yaml_str(&truncated, Path::new("short.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormation { ref reason, .. } if reason.contains("expected 11")));
    }

    #[test]
    fn test_rejects_duplicate_slot() {
        let yaml = sample_yaml().replace("unum: 11", "unum: 10");
        let err = AnchoredFormation::from_yaml_str(&yaml, Path::new("dup.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormation { ref reason, .. } if reason.contains("twice")));
    }

    #[test]
    fn test_rejects_out_of_range_slot() {
        let yaml = sample_yaml().replace("unum: 11", "unum: 12");
        let err = AnchoredFormation::from_yaml_str(&yaml, Path::new("range.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormation { ref reason, .. } if reason.contains("outside")));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = AnchoredFormation::from_yaml_str("slots: [", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}

//! # Tactics Configuration
//!
//! Startup configuration of the tactical core: where formation data lives,
//! which sets to load, and the constants of the positioning pipeline.
//!
//! ## Usage
//! ```no_run
//! use tactics_core::config::TacticsConfig;
//!
//! let config = TacticsConfig::load_from_path("tactics.yaml").unwrap();
//! let helios = TacticsConfig::helios();
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formation::FormationSetName;
use crate::geometry::BALL_DECAY;

/// Constants of the situation classifier and position solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningConfig {
    /// Per-cycle ball speed decay used for ball prediction (default: 0.96)
    pub ball_decay: f32,
    /// Highest allowed x during kickoff restarts (default: -0.5)
    pub kickoff_x_limit: f32,
    /// Distance kept behind the offside line (default: 0.5)
    pub offside_margin: f32,
    /// Roster numbers above this play with one step more offense tolerance (default: 6)
    pub forward_roster_threshold: u8,
    /// Predicted ball beyond this x adds one step of offense tolerance (default: 0.0)
    pub attacking_half_x: f32,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            ball_decay: BALL_DECAY,
            kickoff_x_limit: -0.5,
            offside_margin: 0.5,
            forward_roster_threshold: 6,
            attacking_half_x: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    /// Root directory holding one sub-directory per formation set
    pub formations_dir: PathBuf,
    /// Set used every cycle unless a set selector says otherwise
    pub active_set: FormationSetName,
    /// Sets loaded into the catalog at startup
    pub load_sets: Vec<FormationSetName>,
    pub positioning: PositioningConfig,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            formations_dir: PathBuf::from("formations"),
            active_set: FormationSetName::CyrusBase433,
            load_sets: FormationSetName::ALL.to_vec(),
            positioning: PositioningConfig::default(),
        }
    }
}

/// On-disk shape of [`TacticsConfig`]; set names stay raw until validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TacticsConfigFile {
    formations_dir: Option<PathBuf>,
    active_set: Option<String>,
    load_sets: Option<Vec<String>>,
    positioning: PositioningConfig,
}

impl TryFrom<TacticsConfigFile> for TacticsConfig {
    type Error = ConfigError;

    fn try_from(file: TacticsConfigFile) -> Result<Self, Self::Error> {
        let defaults = TacticsConfig::default();
        Ok(Self {
            formations_dir: file.formations_dir.unwrap_or(defaults.formations_dir),
            active_set: match file.active_set {
                Some(name) => name.parse()?,
                None => defaults.active_set,
            },
            load_sets: match file.load_sets {
                Some(names) => names.iter().map(|name| name.parse()).collect::<Result<_, _>>()?,
                None => defaults.load_sets,
            },
            positioning: file.positioning,
        })
    }
}

impl TacticsConfig {
    pub fn cyrus() -> Self {
        Self::default()
    }

    pub fn helios() -> Self {
        Self { active_set: FormationSetName::HeliosBase433, ..Self::default() }
    }

    pub fn classic() -> Self {
        Self { active_set: FormationSetName::Classic433, ..Self::default() }
    }

    /// Read YAML (`.yaml`/`.yml`) or JSON (anything else).
    ///
    /// A set name outside the known sets fails with
    /// [`ConfigError::UnknownFormationSet`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let file: TacticsConfigFile = if is_yaml {
            serde_yaml::from_str(&raw)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })?
        } else {
            serde_json::from_str(&raw)
                .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?
        };
        Self::try_from(file)
    }

    /// Sets to load, with the active set guaranteed to be among them.
    pub fn sets_to_load(&self) -> Vec<FormationSetName> {
        let mut sets = self.load_sets.clone();
        if !sets.contains(&self.active_set) {
            sets.push(self.active_set);
        }
        sets
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let cfg = TacticsConfig::default();
        assert_eq!(cfg.active_set, FormationSetName::CyrusBase433);
        assert_eq!(cfg.load_sets.len(), 3);
        assert!((cfg.positioning.ball_decay - 0.96).abs() < 1e-6);
        assert!((cfg.positioning.kickoff_x_limit + 0.5).abs() < 1e-6);
        assert!((cfg.positioning.offside_margin - 0.5).abs() < 1e-6);
        assert_eq!(cfg.positioning.forward_roster_threshold, 6);
    }

    #[test]
    fn test_presets_pick_their_set() {
        assert_eq!(TacticsConfig::helios().active_set, FormationSetName::HeliosBase433);
        assert_eq!(TacticsConfig::classic().active_set, FormationSetName::Classic433);
        assert_eq!(TacticsConfig::cyrus(), TacticsConfig::default());
    }

    #[test]
    fn test_sets_to_load_includes_active() {
        let cfg = TacticsConfig {
            load_sets: vec![FormationSetName::Classic433],
            ..TacticsConfig::helios()
        };
        assert_eq!(
            cfg.sets_to_load(),
            vec![FormationSetName::Classic433, FormationSetName::HeliosBase433]
        );
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "active_set: 4-3-3-helios-base\npositioning:\n  offside_margin: 1.0").unwrap();

        let cfg = TacticsConfig::load_from_path(file.path()).unwrap();
        assert_eq!(cfg.active_set, FormationSetName::HeliosBase433);
        assert!((cfg.positioning.offside_margin - 1.0).abs() < 1e-6);
        assert!((cfg.positioning.ball_decay - 0.96).abs() < 1e-6);
        assert_eq!(cfg.formations_dir, PathBuf::from("formations"));
    }

    #[test]
    fn test_load_shipped_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/tactics.yaml");
        let cfg = TacticsConfig::load_from_path(path).unwrap();
        assert_eq!(cfg.formations_dir, PathBuf::from("data/formations"));
        assert_eq!(cfg.active_set, FormationSetName::CyrusBase433);
        assert_eq!(cfg.sets_to_load().len(), 3);
        assert_eq!(cfg.positioning, PositioningConfig::default());
    }

    #[test]
    fn test_unknown_set_name_fails_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "active_set": "3-5-2" }}"#).unwrap();

        let err = TacticsConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormationSet(ref name) if name == "3-5-2"));
    }

    #[test]
    fn test_unknown_set_name_in_yaml_fails_load() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "active_set: 5-4-1").unwrap();
        let err = TacticsConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormationSet(ref name) if name == "5-4-1"));

        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "load_sets: [4-3-3, 3-4-3]").unwrap();
        let err = TacticsConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormationSet(ref name) if name == "3-4-3"));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "positioning: [1, 2").unwrap();

        let err = TacticsConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn test_config_serialization() {
        let cfg = TacticsConfig::helios();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: TacticsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}

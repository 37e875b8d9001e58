//! Formation catalog
//!
//! Loaded once at startup. The catalog never gains or loses sets afterwards;
//! only the ball-relative caches inside its definitions move, through
//! [`FormationDefinition::update`](super::FormationDefinition::update).

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{
    AnchoredFormation, FormationContext, FormationDefinition, FormationSet, FormationSetName,
};
use crate::error::ConfigError;

#[derive(Debug, Default)]
pub struct FormationCatalog {
    sets: Vec<FormationSet>,
}

impl FormationCatalog {
    /// Load `names` from `<root>/<set>/<context>.yaml`.
    ///
    /// Any missing or malformed file aborts the whole load.
    pub fn load(root: impl AsRef<Path>, names: &[FormationSetName]) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let mut catalog = Self::default();

        for &name in names {
            if catalog.contains(name) {
                warn!("Formation set {} listed twice, loading once", name);
                continue;
            }
            let set = load_set(root, name)?;
            catalog.sets.push(set);
        }

        info!(
            "Loaded {} formation set(s) from {}: {}",
            catalog.sets.len(),
            root.display(),
            catalog.names().map(|n| n.dir_name()).collect::<Vec<_>>().join(", ")
        );
        Ok(catalog)
    }

    /// Build from sets constructed elsewhere. Later duplicates are dropped.
    pub fn from_sets(sets: impl IntoIterator<Item = FormationSet>) -> Self {
        let mut catalog = Self::default();
        for set in sets {
            if catalog.contains(set.name()) {
                warn!("Formation set {} supplied twice, keeping the first", set.name());
                continue;
            }
            catalog.sets.push(set);
        }
        catalog
    }

    pub fn contains(&self, name: FormationSetName) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, name: FormationSetName) -> Option<&FormationSet> {
        self.sets.iter().find(|set| set.name() == name)
    }

    /// Like [`get`](Self::get) but reports a missing set as a configuration error.
    pub fn require(&self, name: FormationSetName) -> Result<&FormationSet, ConfigError> {
        self.get(name).ok_or(ConfigError::MissingFormationSet(name))
    }

    pub fn names(&self) -> impl Iterator<Item = FormationSetName> + '_ {
        self.sets.iter().map(FormationSet::name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub(crate) fn index_of(&self, name: FormationSetName) -> Option<usize> {
        self.sets.iter().position(|set| set.name() == name)
    }

    pub(crate) fn set_at(&self, index: usize) -> &FormationSet {
        &self.sets[index]
    }

    pub(crate) fn set_at_mut(&mut self, index: usize) -> &mut FormationSet {
        &mut self.sets[index]
    }
}

/// Path of one context file.
pub fn context_path(root: &Path, name: FormationSetName, context: FormationContext) -> PathBuf {
    root.join(name.dir_name()).join(format!("{}.yaml", context.file_stem()))
}

fn load_set(root: &Path, name: FormationSetName) -> Result<FormationSet, ConfigError> {
    let dir = root.join(name.dir_name());
    if !dir.is_dir() {
        return Err(ConfigError::Io {
            path: dir,
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "formation set directory not found",
            ),
        });
    }

    FormationSet::try_build(name, |context| {
        let formation: Box<dyn FormationDefinition> =
            Box::new(AnchoredFormation::load(context_path(root, name, context))?);
        Ok(formation)
    })
}

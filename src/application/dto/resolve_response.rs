use crate::application::services::PluginResolution;
use crate::resolution::domain::{ArtifactKey, MavenCoordinate, SkipReason, Substitution};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// ResolveResponse - everything one resolution run produced
///
/// Adapters turn this into a report or push it to a resolution consumer.
#[derive(Debug, Clone, Default)]
pub struct ResolveResponse {
    /// Declared roots plus accepted transitive artifacts
    pub resolved: BTreeMap<ArtifactKey, MavenCoordinate>,
    /// Resolved identities reached only through other artifacts
    pub true_transitive: BTreeSet<ArtifactKey>,
    /// BOM-managed versions, in processing order
    pub managed_versions: IndexMap<ArtifactKey, String>,
    pub processed_boms: BTreeSet<ArtifactKey>,
    /// `g:a:v` of each BOM -> its managed entries
    pub bom_entries: BTreeMap<String, Vec<String>>,
    pub skipped: BTreeMap<ArtifactKey, SkipReason>,
    pub not_found: BTreeSet<ArtifactKey>,
    /// Installed provided-scope dependencies seen during the walk
    pub provided: BTreeSet<ArtifactKey>,
    /// Resolved identities only needed by tests
    pub test_context: BTreeSet<ArtifactKey>,
    pub substitutions: Vec<Substitution>,
    pub plugins: Vec<PluginResolution>,
}

impl ResolveResponse {
    /// Something declared or required could not be located on disk.
    pub fn has_missing(&self) -> bool {
        !self.not_found.is_empty()
            || self
                .skipped
                .values()
                .any(|reason| *reason == SkipReason::ArtifactMissing)
    }

    /// Resolved artifacts needed outside of tests.
    pub fn main_artifacts(&self) -> impl Iterator<Item = &MavenCoordinate> {
        self.resolved
            .iter()
            .filter(|(key, _)| !self.test_context.contains(*key))
            .map(|(_, coordinate)| coordinate)
    }
}

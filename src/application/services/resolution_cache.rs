use crate::resolution::domain::{MavenCoordinate, PomHierarchy, PomModel, PropertyMap};
use crate::resolution::services::{DirectDependencies, ManagedDependencies};
use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::Arc;

/// Per-session memo of everything derived from POM files, keyed by path.
///
/// One instance belongs to one resolution session and is shared by
/// reference (`Arc`) with the workers of that session only. POM files are
/// assumed immutable for the session's lifetime, so entries are never
/// invalidated. Lookups are check-then-insert: two workers racing on the
/// same path may both compute the value, and the later insert wins.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    pub(crate) models: DashMap<PathBuf, Option<Arc<PomModel>>>,
    pub(crate) hierarchies: DashMap<PathBuf, Arc<PomHierarchy>>,
    pub(crate) properties: DashMap<PathBuf, Arc<PropertyMap>>,
    pub(crate) management: DashMap<PathBuf, Arc<ManagedDependencies>>,
    pub(crate) dependencies: DashMap<PathBuf, Arc<DirectDependencies>>,
    /// direct dependencies with BOM versions applied, keyed by path and
    /// the fingerprint of the version set
    pub(crate) bom_dependencies: DashMap<(PathBuf, u64), Arc<DirectDependencies>>,
    pub(crate) coordinates: DashMap<PathBuf, Option<MavenCoordinate>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of POM files read so far, including ones that failed to parse.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn hierarchy_count(&self) -> usize {
        self.hierarchies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.hierarchies.is_empty()
    }

    pub fn bom_dependency_count(&self) -> usize {
        self.bom_dependencies.len()
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// No shard lock is held while `compute` runs, so `compute` may itself
    /// consult the cache.
    pub(crate) fn memoize<K, Q, V, F>(map: &DashMap<K, V>, key: &Q, compute: F) -> V
    where
        K: Eq + Hash + Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
        V: Clone,
        F: FnOnce() -> V,
    {
        if let Some(cached) = map.get(key) {
            return cached.value().clone();
        }
        let value = compute();
        map.insert(key.to_owned(), value.clone());
        value
    }
}

use crate::application::services::ResolutionCache;
use crate::ports::outbound::PomReader;
use crate::resolution::domain::{PomHierarchy, PomModel};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Maximum number of models in a hierarchy, the starting POM included.
pub const MAX_HIERARCHY_DEPTH: usize = 10;

/// HierarchyLoader walks `<parent>` references from a starting POM.
///
/// A parent is looked up as `<parent artifactId>.pom` in the child's own
/// directory. The walk stops at a POM without parent, at a parent that
/// cannot be read, or after [`MAX_HIERARCHY_DEPTH`] models; the last case
/// truncates silently and also bounds cyclic chains.
pub struct HierarchyLoader<'a, R: PomReader> {
    reader: &'a R,
    cache: &'a ResolutionCache,
}

impl<'a, R: PomReader> HierarchyLoader<'a, R> {
    pub fn new(reader: &'a R, cache: &'a ResolutionCache) -> Self {
        Self { reader, cache }
    }

    /// Reads one model, at most once per path for the cache's lifetime.
    pub fn model(&self, path: &Path) -> Option<Arc<PomModel>> {
        ResolutionCache::memoize(&self.cache.models, path, || {
            match self.reader.read_pom(path) {
                Ok(model) => Some(Arc::new(model)),
                Err(e) => {
                    tracing::debug!("Ignoring unreadable POM {}: {:#}", path.display(), e);
                    None
                }
            }
        })
    }

    /// Loads the ancestor-first chain ending at `path`.
    /// Empty when `path` itself cannot be read.
    pub fn load(&self, path: &Path) -> Arc<PomHierarchy> {
        ResolutionCache::memoize(&self.cache.hierarchies, path, || {
            let mut chain = Vec::new();
            let mut next = Some(path.to_path_buf());

            while let Some(current) = next.take() {
                if chain.len() >= MAX_HIERARCHY_DEPTH {
                    tracing::debug!(
                        "Parent chain of {} truncated at {} levels",
                        path.display(),
                        MAX_HIERARCHY_DEPTH
                    );
                    break;
                }
                let Some(model) = self.model(&current) else {
                    break;
                };
                next = Self::parent_path(&model);
                chain.push(model);
            }

            chain.reverse();
            Arc::new(PomHierarchy::new(chain))
        })
    }

    fn parent_path(model: &PomModel) -> Option<PathBuf> {
        let artifact_id = model.parent_artifact_id()?;
        let directory = model.directory()?;
        Some(directory.join(format!("{}.pom", artifact_id)))
    }
}

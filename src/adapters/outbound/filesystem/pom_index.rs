use super::file_walker::collect_files;
use crate::application::services::BulkClassifier;
use crate::ports::outbound::{PomFinder, PomReader, ProgressReporter};
use crate::resolution::domain::{ArtifactKey, MavenCoordinate};
use crate::resolution::policies::VersionOrdering;
use crate::resolution::services::PomFilenameMatcher;
use crate::shared::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// PomIndex adapter answering lookups from a one-time scan
///
/// Every `*.pom` under the roots is parsed once up front, in the same order
/// and to the same depth as [`DirectoryPomFinder`](super::DirectoryPomFinder)
/// walks them. Lookups then apply the finder's filename rule to the stored
/// paths, so both adapters return the same coordinate.
#[derive(Debug, Default)]
pub struct PomIndex {
    by_ga: HashMap<ArtifactKey, Vec<MavenCoordinate>>,
    by_group: HashMap<String, Vec<MavenCoordinate>>,
}

impl PomIndex {
    pub fn build<R: PomReader>(
        classifier: &BulkClassifier<R>,
        roots: &[PathBuf],
        max_depth: usize,
        reporter: Option<&dyn ProgressReporter>,
    ) -> Result<Self> {
        let paths = collect_files(roots, max_depth, "pom");
        let coordinates = classifier.coordinates_in_order(&paths, reporter)?;
        Ok(Self::from_coordinates(coordinates))
    }

    /// Builds the index from coordinates given in scan order.
    pub fn from_coordinates(coordinates: impl IntoIterator<Item = MavenCoordinate>) -> Self {
        let mut by_ga: HashMap<ArtifactKey, Vec<MavenCoordinate>> = HashMap::new();
        let mut by_group: HashMap<String, Vec<MavenCoordinate>> = HashMap::new();
        for coordinate in coordinates {
            by_group
                .entry(coordinate.group_id.clone())
                .or_default()
                .push(coordinate.clone());
            by_ga.entry(coordinate.key()).or_default().push(coordinate);
        }

        // Stable sort keeps scan order among equal versions.
        for members in by_group.values_mut() {
            members.sort_by(|a, b| {
                a.artifact_id
                    .cmp(&b.artifact_id)
                    .then_with(|| VersionOrdering::compare(&a.version, &b.version))
            });
        }

        tracing::debug!("POM index holds {} identities", by_ga.len());
        Self { by_ga, by_group }
    }

    pub fn len(&self) -> usize {
        self.by_ga.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ga.is_empty()
    }
}

impl PomFinder for PomIndex {
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<MavenCoordinate> {
        self.by_ga
            .get(&ArtifactKey::new(group_id, artifact_id))?
            .iter()
            .find(|coordinate| {
                coordinate
                    .pom_path
                    .as_deref()
                    .is_some_and(|path| PomFilenameMatcher::matches_any(path, group_id, artifact_id))
            })
            .cloned()
    }

    fn find_all_for_group(&self, group_id: &str) -> Vec<MavenCoordinate> {
        self.by_group.get(group_id).cloned().unwrap_or_default()
    }
}

use super::file_walker::collect_files;
use crate::application::services::PomParser;
use crate::ports::outbound::{PomFinder, PomReader};
use crate::resolution::domain::MavenCoordinate;
use crate::resolution::policies::VersionOrdering;
use crate::resolution::services::PomFilenameMatcher;
use std::path::PathBuf;
use std::sync::Arc;

/// DirectoryPomFinder adapter scanning POM directories on every lookup
///
/// Candidate files are picked by filename heuristics, then parsed and
/// checked against the requested groupId and artifactId. The first
/// structurally valid match in scan order wins.
pub struct DirectoryPomFinder<R: PomReader> {
    roots: Vec<PathBuf>,
    max_depth: usize,
    parser: Arc<PomParser<R>>,
}

impl<R: PomReader> DirectoryPomFinder<R> {
    pub fn new(roots: Vec<PathBuf>, max_depth: usize, parser: Arc<PomParser<R>>) -> Self {
        Self {
            roots,
            max_depth,
            parser,
        }
    }

    fn pom_files(&self) -> Vec<PathBuf> {
        collect_files(&self.roots, self.max_depth, "pom")
    }
}

impl<R: PomReader> PomFinder for DirectoryPomFinder<R> {
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<MavenCoordinate> {
        self.pom_files()
            .into_iter()
            .filter(|path| PomFilenameMatcher::matches_any(path, group_id, artifact_id))
            .filter_map(|path| self.parser.coordinate(&path))
            .find(|coordinate| {
                coordinate.group_id == group_id && coordinate.artifact_id == artifact_id
            })
    }

    fn find_all_for_group(&self, group_id: &str) -> Vec<MavenCoordinate> {
        let mut found: Vec<MavenCoordinate> = self
            .pom_files()
            .into_iter()
            .filter_map(|path| self.parser.coordinate(&path))
            .filter(|coordinate| coordinate.group_id == group_id)
            .collect();

        found.sort_by(|a, b| {
            a.artifact_id
                .cmp(&b.artifact_id)
                .then_with(|| VersionOrdering::compare(&a.version, &b.version))
        });
        found
    }
}

use crate::adapters::outbound::filesystem::collect_files;
use crate::application::services::PomParser;
use crate::ports::outbound::{PomReader, ProgressReporter};
use crate::resolution::domain::{ArtifactKey, MavenCoordinate};
use crate::resolution::policies::VersionOrdering;
use crate::shared::Result;
use anyhow::Context;
use dashmap::{DashMap, DashSet};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Result of classifying a set of POM files.
#[derive(Debug, Default)]
pub struct BulkClassification {
    /// pom-packaged files with a dependencyManagement section
    pub boms: Vec<MavenCoordinate>,
    /// every other file with readable coordinates
    pub artifacts: Vec<MavenCoordinate>,
    /// files that could not be read or carried no groupId/artifactId
    pub failed: Vec<PathBuf>,
    /// files whose identity had already been seen
    pub duplicates: usize,
}

impl BulkClassification {
    pub fn total(&self) -> usize {
        self.boms.len() + self.artifacts.len()
    }

    /// BOMs and artifacts together.
    pub fn coordinates(&self) -> impl Iterator<Item = &MavenCoordinate> {
        self.boms.iter().chain(self.artifacts.iter())
    }
}

/// BulkClassifier - parallel read/classify pass over many POM files
///
/// Work is spread over a dedicated rayon pool, one worker per available CPU
/// by default. Each worker reads, classifies and inserts one file; the only
/// shared state is the concurrent output maps, deduplicated by identity
/// (the newest version is kept). Results are read after the pool joins and
/// are sorted by identity.
pub struct BulkClassifier<R: PomReader> {
    parser: Arc<PomParser<R>>,
    workers: usize,
}

impl<R: PomReader> BulkClassifier<R> {
    pub fn new(parser: Arc<PomParser<R>>) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { parser, workers }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scans `roots` up to `max_depth` and classifies every `*.pom` found.
    pub fn classify_roots(
        &self,
        roots: &[PathBuf],
        max_depth: usize,
        reporter: Option<&dyn ProgressReporter>,
    ) -> Result<BulkClassification> {
        let paths = collect_files(roots, max_depth, "pom");
        self.classify_paths(&paths, reporter)
    }

    pub fn classify_paths(
        &self,
        paths: &[PathBuf],
        reporter: Option<&dyn ProgressReporter>,
    ) -> Result<BulkClassification> {
        let boms: DashMap<ArtifactKey, MavenCoordinate> = DashMap::new();
        let artifacts: DashMap<ArtifactKey, MavenCoordinate> = DashMap::new();
        let failed: DashSet<PathBuf> = DashSet::new();
        let duplicates = AtomicUsize::new(0);
        let done = AtomicUsize::new(0);
        let total = paths.len();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .context("Failed to start POM classification workers")?;

        pool.install(|| {
            paths.par_iter().for_each(|path| {
                match self.parser.coordinate(path) {
                    Some(coordinate) => {
                        let target = if self.parser.is_bom(path) {
                            &boms
                        } else {
                            &artifacts
                        };
                        if !Self::insert_newest(target, coordinate) {
                            duplicates.fetch_add(1, AtomicOrdering::Relaxed);
                        }
                    }
                    None => {
                        failed.insert(path.clone());
                    }
                }

                let current = done.fetch_add(1, AtomicOrdering::Relaxed) + 1;
                if let Some(reporter) = reporter {
                    reporter.report_progress(current, total, Some("classifying POM files"));
                }
            });
        });

        let mut classification = BulkClassification {
            boms: Self::sorted(boms),
            artifacts: Self::sorted(artifacts),
            failed: failed.into_iter().collect(),
            duplicates: duplicates.into_inner(),
        };
        classification.failed.sort();

        tracing::info!(
            "Classified {} POM files: {} BOMs, {} artifacts, {} unreadable, {} duplicates",
            total,
            classification.boms.len(),
            classification.artifacts.len(),
            classification.failed.len(),
            classification.duplicates
        );

        Ok(classification)
    }

    /// Effective coordinates of `paths` in input order. Unreadable files are
    /// dropped.
    pub fn coordinates_in_order(
        &self,
        paths: &[PathBuf],
        reporter: Option<&dyn ProgressReporter>,
    ) -> Result<Vec<MavenCoordinate>> {
        let done = AtomicUsize::new(0);
        let total = paths.len();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .context("Failed to start POM indexing workers")?;

        Ok(pool.install(|| {
            paths
                .par_iter()
                .filter_map(|path| {
                    let coordinate = self.parser.coordinate(path);
                    let current = done.fetch_add(1, AtomicOrdering::Relaxed) + 1;
                    if let Some(reporter) = reporter {
                        reporter.report_progress(current, total, Some("indexing POM files"));
                    }
                    coordinate
                })
                .collect()
        }))
    }

    /// Inserts when the identity is new or the version is newer.
    /// Returns false when the identity was already present.
    fn insert_newest(map: &DashMap<ArtifactKey, MavenCoordinate>, coordinate: MavenCoordinate) -> bool {
        let mut is_new = false;
        map.entry(coordinate.key())
            .and_modify(|existing| {
                let newer = VersionOrdering::compare(&coordinate.version, &existing.version);
                let tie_break = coordinate.pom_path < existing.pom_path;
                if newer == Ordering::Greater || (newer == Ordering::Equal && tie_break) {
                    *existing = coordinate.clone();
                }
            })
            .or_insert_with(|| {
                is_new = true;
                coordinate.clone()
            });
        is_new
    }

    fn sorted(map: DashMap<ArtifactKey, MavenCoordinate>) -> Vec<MavenCoordinate> {
        let mut entries: Vec<(ArtifactKey, MavenCoordinate)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, coordinate)| coordinate).collect()
    }
}

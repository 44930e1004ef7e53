use crate::application::services::PomParser;
use crate::ports::outbound::{PomFinder, PomReader};
use crate::resolution::domain::{ArtifactKey, DeclaredDependency, MavenCoordinate};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Aggregate output of BOM expansion.
#[derive(Debug, Default, Clone)]
pub struct BomProcessingResult {
    /// identity -> version, the first BOM processed wins a conflict
    pub managed_versions: IndexMap<ArtifactKey, String>,
    pub processed_boms: BTreeSet<ArtifactKey>,
    /// `g:a:v` of each BOM -> its direct managed entries as `g:a:v`
    pub bom_entries: BTreeMap<String, Vec<String>>,
    /// identities managed by a BOM that was declared in test context
    pub test_context_managed: BTreeSet<ArtifactKey>,
}

impl BomProcessingResult {
    pub fn is_bom(&self, key: &ArtifactKey) -> bool {
        self.processed_boms.contains(key)
    }

    pub fn version_lookup(&self) -> HashMap<ArtifactKey, String> {
        self.managed_versions
            .iter()
            .map(|(key, version)| (key.clone(), version.clone()))
            .collect()
    }
}

/// Expands declared BOMs breadth-first, following BOMs that are themselves
/// managed entries. Each BOM identity is processed once.
pub struct BomProcessor<'a, F: PomFinder + ?Sized, R: PomReader> {
    finder: &'a F,
    parser: &'a PomParser<R>,
}

impl<'a, F: PomFinder + ?Sized, R: PomReader> BomProcessor<'a, F, R> {
    pub fn new(finder: &'a F, parser: &'a PomParser<R>) -> Self {
        Self { finder, parser }
    }

    fn locate_bom(&self, key: &ArtifactKey) -> Option<MavenCoordinate> {
        let found = self.finder.find(key.group_id(), key.artifact_id())?;
        let path = found.pom_path.as_deref()?;
        self.parser.is_bom(path).then_some(found)
    }

    pub fn process(&self, declared: &[DeclaredDependency]) -> BomProcessingResult {
        let mut result = BomProcessingResult::default();
        let mut queue: VecDeque<(MavenCoordinate, bool)> = VecDeque::new();
        let mut queued: HashSet<ArtifactKey> = HashSet::new();

        // Non-test declarations first so a BOM declared both ways is main context.
        let mut seeds: Vec<&DeclaredDependency> = declared.iter().collect();
        seeds.sort_by_key(|d| d.test_only);

        for dependency in seeds {
            let key = dependency.key();
            if key.has_placeholder() || queued.contains(&key) {
                continue;
            }
            if let Some(bom) = self.locate_bom(&key) {
                tracing::debug!("Declared BOM {}", bom.gav());
                queued.insert(key);
                queue.push_back((bom, dependency.test_only));
            }
        }

        while let Some((bom, test_context)) = queue.pop_front() {
            let key = bom.key();
            if !result.processed_boms.insert(key) {
                continue;
            }
            let Some(path) = bom.pom_path.as_deref() else {
                continue;
            };

            let managed = self.parser.dependency_management(path);
            let mut entries = Vec::with_capacity(managed.len());

            for (managed_key, entry) in managed.iter() {
                entries.push(entry.describe());

                if let Some(version) = entry.usable_version() {
                    result
                        .managed_versions
                        .entry(managed_key.clone())
                        .or_insert_with(|| version.to_string());
                }
                if test_context {
                    result.test_context_managed.insert(managed_key.clone());
                }

                if queued.contains(managed_key) || managed_key.has_placeholder() {
                    continue;
                }
                if let Some(nested) = self.locate_bom(managed_key) {
                    tracing::debug!("{} imports BOM {}", bom.gav(), nested.gav());
                    queued.insert(managed_key.clone());
                    queue.push_back((nested, test_context));
                }
            }

            tracing::info!("Processed BOM {} with {} managed entries", bom.gav(), entries.len());
            result.bom_entries.insert(bom.gav(), entries);
        }

        result
    }
}

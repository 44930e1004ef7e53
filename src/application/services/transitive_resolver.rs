use crate::application::services::{ExternalVersions, PomParser};
use crate::ports::outbound::{ArtifactVerifier, PomFinder, PomReader};
use crate::resolution::domain::{ArtifactKey, MavenCoordinate, ResolutionState, Scope, SkipReason};
use crate::resolution::policies::ScopePriority;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Outcome of a transitive closure.
#[derive(Debug, Default, Clone)]
pub struct TransitiveResolution {
    /// roots plus every accepted transitive artifact
    pub resolved: BTreeMap<ArtifactKey, MavenCoordinate>,
    /// accepted identities that were neither roots nor BOM-managed
    pub true_transitive: BTreeSet<ArtifactKey>,
    pub skipped: BTreeMap<ArtifactKey, SkipReason>,
    pub not_found: BTreeSet<ArtifactKey>,
    /// provided-scope dependencies that are installed on the system
    pub provided: BTreeSet<ArtifactKey>,
}

impl TransitiveResolution {
    pub fn test_context(&self) -> BTreeSet<ArtifactKey> {
        self.resolved
            .iter()
            .filter(|(_, coordinate)| coordinate.test_context)
            .map(|(key, _)| key.clone())
            .collect()
    }
}

/// Breadth-first closure over the direct dependencies of resolved artifacts.
///
/// Each identity is expanded at most once. Test, placeholder and
/// pom-packaged dependencies are recorded as skipped and never traversed.
/// An accepted dependency takes the scope its parent declared for it.
pub struct TransitiveResolver<'a, R, F, V>
where
    R: PomReader,
    F: PomFinder + ?Sized,
    V: ArtifactVerifier + ?Sized,
{
    parser: &'a PomParser<R>,
    finder: &'a F,
    verifier: &'a V,
    managed_versions: ExternalVersions,
}

impl<'a, R, F, V> TransitiveResolver<'a, R, F, V>
where
    R: PomReader,
    F: PomFinder + ?Sized,
    V: ArtifactVerifier + ?Sized,
{
    pub fn new(parser: &'a PomParser<R>, finder: &'a F, verifier: &'a V) -> Self {
        Self {
            parser,
            finder,
            verifier,
            managed_versions: ExternalVersions::default(),
        }
    }

    /// BOM-managed versions used to fill gaps in parsed dependencies.
    pub fn with_managed_versions(mut self, managed_versions: HashMap<ArtifactKey, String>) -> Self {
        self.managed_versions = ExternalVersions::new(managed_versions);
        self
    }

    pub fn resolve(
        &self,
        roots: &BTreeMap<ArtifactKey, MavenCoordinate>,
        known_system: &BTreeMap<ArtifactKey, MavenCoordinate>,
    ) -> TransitiveResolution {
        let mut state = ResolutionState::new();
        let mut true_transitive = BTreeSet::new();
        let mut provided = BTreeSet::new();

        for root in roots.values() {
            state.accept(root.clone());
            state.enqueue(root.clone());
        }

        while let Some(current) = state.next() {
            let Some(pom_path) = current.pom_path.as_deref() else {
                tracing::debug!("{} has no POM, not expanding", current.gav());
                continue;
            };

            let dependencies = self.parser.dependencies_with(pom_path, &self.managed_versions);
            tracing::debug!(
                "Expanding {} ({} direct dependencies)",
                current.gav(),
                dependencies.len()
            );

            for dependency in dependencies.values() {
                let key = dependency.key();

                if dependency.scope == Scope::Test {
                    state.skip(key, SkipReason::Test);
                    continue;
                }
                if dependency.has_placeholder() {
                    state.skip(key, SkipReason::Placeholder);
                    continue;
                }
                if dependency.is_pom() {
                    state.skip(key, SkipReason::Bom);
                    continue;
                }
                if dependency.scope == Scope::Provided {
                    if known_system.contains_key(&key) || state.is_resolved(&key) {
                        provided.insert(key);
                    } else {
                        state.skip(key, SkipReason::Provided);
                    }
                    continue;
                }

                if let Some(existing) = state.resolved_mut(&key) {
                    existing.scope = ScopePriority::merge(existing.scope, dependency.scope);
                    if !current.test_context {
                        existing.test_context = false;
                    }
                    continue;
                }

                let Some(found) = self
                    .finder
                    .find(&dependency.group_id, &dependency.artifact_id)
                else {
                    tracing::debug!("Transitive {} not found", key);
                    state.skip(key, SkipReason::NotFound);
                    continue;
                };
                if found.is_pom() {
                    state.skip(key, SkipReason::Bom);
                    continue;
                }
                if !self.verifier.exists(&found) {
                    state.skip(key, SkipReason::ArtifactMissing);
                    continue;
                }

                let accepted = found
                    .with_scope(dependency.scope)
                    .in_test_context(current.test_context);

                if !roots.contains_key(&key) && !self.managed_versions.contains_key(&key) {
                    true_transitive.insert(key.clone());
                }
                tracing::debug!("Accepted {} ({})", accepted.gav(), accepted.scope);
                state.accept(accepted.clone());
                state.enqueue(accepted);
            }
        }

        let (resolved, skipped, not_found) = state.into_parts();
        tracing::info!(
            "Transitive closure: {} resolved, {} new, {} skipped",
            resolved.len(),
            true_transitive.len(),
            skipped.len()
        );

        TransitiveResolution {
            resolved,
            true_transitive,
            skipped,
            not_found,
            provided,
        }
    }
}

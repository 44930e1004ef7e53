use crate::application::dto::PLUGIN_MARKER_SUFFIX;
use crate::application::services::{BomProcessingResult, PluginMatcher, PluginResolution, PomParser};
use crate::ports::outbound::{ArtifactVerifier, PomFinder, PomReader};
use crate::resolution::domain::{ArtifactKey, DeclaredDependency, MavenCoordinate, SkipReason};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// Declared identities matched to installed artifacts.
#[derive(Debug, Default, Clone)]
pub struct ArtifactScan {
    pub system_artifacts: BTreeMap<ArtifactKey, MavenCoordinate>,
    pub plugins: Vec<PluginResolution>,
    pub skipped: BTreeMap<ArtifactKey, SkipReason>,
    pub not_found: BTreeSet<ArtifactKey>,
}

impl ArtifactScan {
    fn skip(&mut self, key: ArtifactKey, reason: SkipReason) {
        if reason == SkipReason::NotFound {
            self.not_found.insert(key.clone());
        }
        self.skipped.entry(key).or_insert(reason);
    }

    /// Adds a coordinate without downgrading an existing main-context entry.
    fn insert(&mut self, coordinate: MavenCoordinate) {
        match self.system_artifacts.get_mut(&coordinate.key()) {
            Some(existing) => existing.test_context &= coordinate.test_context,
            None => {
                self.system_artifacts.insert(coordinate.key(), coordinate);
            }
        }
    }
}

/// Resolves the host's declared dependencies against the local installation.
///
/// BOM identities are left to the BOM processor. Plugin marker identities
/// (`<id>:<id>.gradle.plugin`) go through the plugin matcher.
pub struct ArtifactScanner<'a, R, F, V>
where
    R: PomReader,
    F: PomFinder + ?Sized,
    V: ArtifactVerifier + ?Sized,
{
    parser: &'a PomParser<R>,
    finder: &'a F,
    verifier: &'a V,
}

impl<'a, R, F, V> ArtifactScanner<'a, R, F, V>
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
        }
    }

    pub fn scan(&self, declared: &[DeclaredDependency], boms: &BomProcessingResult) -> ArtifactScan {
        let mut scan = ArtifactScan::default();

        // identity -> declared only in test configurations
        let mut identities: IndexMap<ArtifactKey, bool> = IndexMap::new();
        for dependency in declared {
            let test_only = identities.entry(dependency.key()).or_insert(true);
            *test_only &= dependency.test_only;
        }

        for (key, test_only) in identities {
            if key.has_placeholder() {
                scan.skip(key, SkipReason::Placeholder);
                continue;
            }
            if boms.is_bom(&key) {
                continue;
            }
            if key.artifact_id().ends_with(PLUGIN_MARKER_SUFFIX) {
                self.scan_plugin(&mut scan, key, test_only);
                continue;
            }

            let Some(found) = self.finder.find(key.group_id(), key.artifact_id()) else {
                tracing::warn!("No installed POM for {}", key);
                scan.skip(key, SkipReason::NotFound);
                continue;
            };
            if found.is_pom()
                && found
                    .pom_path
                    .as_deref()
                    .is_some_and(|path| self.parser.is_bom(path))
            {
                continue;
            }
            if !self.verifier.exists(&found) {
                tracing::warn!("POM found but no jar installed for {}", found.gav());
                scan.skip(key, SkipReason::ArtifactMissing);
                continue;
            }

            let test_context = test_only || boms.test_context_managed.contains(&key);
            scan.insert(found.in_test_context(test_context));
        }

        tracing::info!(
            "Matched {} declared dependencies to system artifacts",
            scan.system_artifacts.len()
        );
        scan
    }

    fn scan_plugin(&self, scan: &mut ArtifactScan, key: ArtifactKey, test_only: bool) {
        let matcher = PluginMatcher::new(self.parser, self.finder, self.verifier);
        let Some(resolution) = matcher.resolve(key.group_id()) else {
            scan.skip(key, SkipReason::NotFound);
            return;
        };

        if !resolution.artifact.is_pom() {
            scan.insert(resolution.artifact.clone().in_test_context(test_only));
        }
        for implementation in &resolution.implementation {
            scan.insert(implementation.clone().in_test_context(test_only));
        }
        scan.plugins.push(resolution);
    }
}

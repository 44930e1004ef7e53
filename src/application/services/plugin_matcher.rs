use crate::application::services::PomParser;
use crate::ports::outbound::{ArtifactVerifier, PomFinder, PomReader};
use crate::resolution::domain::MavenCoordinate;
use crate::resolution::services::PluginCandidates;
use serde::Serialize;

/// A plugin id matched to an installed artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginResolution {
    pub plugin_id: String,
    pub artifact: MavenCoordinate,
    /// installed dependencies of a plugin marker POM
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implementation: Vec<MavenCoordinate>,
}

/// Maps plugin ids to installed artifacts using naming conventions.
pub struct PluginMatcher<'a, R, F, V>
where
    R: PomReader,
    F: PomFinder + ?Sized,
    V: ArtifactVerifier + ?Sized,
{
    parser: &'a PomParser<R>,
    finder: &'a F,
    verifier: &'a V,
}

impl<'a, R, F, V> PluginMatcher<'a, R, F, V>
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

    /// Resolves one plugin id. Core plugins and unknown ids give `None`.
    pub fn resolve(&self, plugin_id: &str) -> Option<PluginResolution> {
        if PluginCandidates::is_core_plugin(plugin_id) {
            tracing::debug!("Skipping core plugin {}", plugin_id);
            return None;
        }

        let artifact = self.match_candidates(plugin_id).or_else(|| {
            tracing::debug!("No candidate matched {}, scanning its group", plugin_id);
            self.finder
                .find_all_for_group(plugin_id)
                .into_iter()
                .find(|c| PluginCandidates::looks_like_plugin_artifact(&c.artifact_id))
        })?;

        let implementation = if artifact.is_pom() {
            self.marker_dependencies(&artifact)
        } else {
            Vec::new()
        };

        tracing::info!("Plugin {} -> {}", plugin_id, artifact.gav());
        Some(PluginResolution {
            plugin_id: plugin_id.to_string(),
            artifact,
            implementation,
        })
    }

    fn match_candidates(&self, plugin_id: &str) -> Option<MavenCoordinate> {
        PluginCandidates::for_plugin(plugin_id)
            .iter()
            .filter_map(|candidate| {
                self.finder
                    .find(candidate.group_id(), candidate.artifact_id())
            })
            .find(|found| self.verifier.exists(found))
    }

    /// A marker POM points at the real implementation through its dependencies.
    fn marker_dependencies(&self, marker: &MavenCoordinate) -> Vec<MavenCoordinate> {
        let Some(path) = marker.pom_path.as_deref() else {
            return Vec::new();
        };

        self.parser
            .dependencies(path)
            .values()
            .filter(|dep| !dep.has_placeholder() && !dep.is_pom())
            .filter_map(|dep| self.finder.find(&dep.group_id, &dep.artifact_id))
            .filter(|found| self.verifier.exists(found))
            .collect()
    }
}

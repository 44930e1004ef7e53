use crate::resolution::domain::ArtifactKey;

/// Naming conventions observed in installed Gradle plugin artifacts.
pub struct PluginCandidates;

impl PluginCandidates {
    /// Plugins provided by Gradle itself; they never map to an installed artifact.
    pub fn is_core_plugin(plugin_id: &str) -> bool {
        plugin_id.starts_with("org.gradle.") || !plugin_id.contains('.')
    }

    /// Ordered `(groupId = plugin id, artifactId = guess)` candidates.
    ///
    /// The first block is derived from the last id segment. When the id has
    /// a domain prefix, a second block is derived from everything after the
    /// first segment with dots turned into hyphens
    /// (`com.example.foo.bar` -> `example-foo-bar`), starting with that
    /// remainder itself.
    pub fn for_plugin(plugin_id: &str) -> Vec<ArtifactKey> {
        let mut names: Vec<String> = vec![
            plugin_id.to_string(),
            format!("{}.gradle.plugin", plugin_id),
        ];

        let segments: Vec<&str> = plugin_id.split('.').filter(|s| !s.is_empty()).collect();
        if let Some(last) = segments.last() {
            names.extend(Self::conventions(last));
        }
        if segments.len() > 1 {
            let remainder = segments[1..].join("-");
            names.extend([
                remainder.clone(),
                format!("{}-plugin", remainder),
                format!("gradle-{}", remainder),
                format!("gradle-{}-plugin", remainder),
                format!("{}-gradle-plugin", remainder),
            ]);
        }

        let mut seen = Vec::with_capacity(names.len());
        for name in names {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }

        seen.into_iter()
            .map(|artifact_id| ArtifactKey::new(plugin_id, artifact_id))
            .collect()
    }

    fn conventions(name: &str) -> [String; 6] {
        [
            format!("{}-plugin", name),
            format!("gradle-{}", name),
            format!("gradle-{}-plugin", name),
            format!("{}-gradle-plugin", name),
            format!("gradle-plugin-{}", name),
            format!("{}-gradle", name),
        ]
    }

    /// Fallback filter over every artifact of the plugin's group.
    pub fn looks_like_plugin_artifact(artifact_id: &str) -> bool {
        artifact_id.contains("gradle") || artifact_id.contains("plugin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts(plugin_id: &str) -> Vec<String> {
        PluginCandidates::for_plugin(plugin_id)
            .into_iter()
            .map(|key| key.artifact_id().to_string())
            .collect()
    }

    #[test]
    fn test_candidate_order_for_three_segment_id() {
        assert_eq!(
            artifacts("com.example.shadow"),
            vec![
                "com.example.shadow",
                "com.example.shadow.gradle.plugin",
                "shadow-plugin",
                "gradle-shadow",
                "gradle-shadow-plugin",
                "shadow-gradle-plugin",
                "gradle-plugin-shadow",
                "shadow-gradle",
                "example-shadow",
                "example-shadow-plugin",
                "gradle-example-shadow",
                "gradle-example-shadow-plugin",
                "example-shadow-gradle-plugin",
            ]
        );
    }

    #[test]
    fn test_domain_stripped_variants_for_long_id() {
        let candidates = artifacts("io.github.foo.bar");
        assert!(candidates.contains(&"bar-plugin".to_string()));
        assert_eq!(
            candidates[candidates.len() - 5..],
            [
                "github-foo-bar",
                "github-foo-bar-plugin",
                "gradle-github-foo-bar",
                "gradle-github-foo-bar-plugin",
                "github-foo-bar-gradle-plugin",
            ]
        );
    }

    #[test]
    fn test_domain_stripped_remainder_is_a_candidate() {
        let candidates = artifacts("com.acme.tool");
        let remainder = candidates.iter().position(|c| c == "acme-tool").unwrap();
        let last_segment = candidates.iter().position(|c| c == "tool-gradle").unwrap();
        assert!(last_segment < remainder);
        assert_eq!(candidates.last().unwrap(), "acme-tool-gradle-plugin");
    }

    #[test]
    fn test_candidates_use_plugin_id_as_group() {
        for key in PluginCandidates::for_plugin("com.example.shadow") {
            assert_eq!(key.group_id(), "com.example.shadow");
        }
    }

    #[test]
    fn test_core_plugins() {
        assert!(PluginCandidates::is_core_plugin("java"));
        assert!(PluginCandidates::is_core_plugin("org.gradle.java-library"));
        assert!(!PluginCandidates::is_core_plugin("com.example.shadow"));
    }

    #[test]
    fn test_fallback_filter() {
        assert!(PluginCandidates::looks_like_plugin_artifact("shadow-gradle"));
        assert!(PluginCandidates::looks_like_plugin_artifact("my-plugin"));
        assert!(!PluginCandidates::looks_like_plugin_artifact("shadow-core"));
    }
}

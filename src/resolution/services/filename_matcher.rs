use crate::resolution::policies::VersionOrdering;
use std::path::Path;

/// Heuristics for the names distributions give installed POM files.
///
/// Packagers rarely keep `artifactId.pom`; they prefix group segments
/// (`apache-commons-lang3.pom`) or append versions (`commons-lang3-3.12.0.pom`).
pub struct PomFilenameMatcher;

impl PomFilenameMatcher {
    /// Candidate base names for `groupId:artifactId`, without extension.
    ///
    /// For `org.apache.commons:commons-lang3` this yields
    /// `commons-lang3`, `apache-commons-commons-lang3`, `apache-commons-lang3`
    /// and `commons-commons-lang3`.
    pub fn variants(group_id: &str, artifact_id: &str) -> Vec<String> {
        let mut variants = vec![artifact_id.to_string()];
        let parts: Vec<&str> = group_id.split('.').filter(|p| !p.is_empty()).collect();

        if parts.len() > 1 {
            let mut push = |variant: String| {
                if !variants.contains(&variant) {
                    variants.push(variant);
                }
            };
            push(format!("{}-{}", parts[1..].join("-"), artifact_id));
            if parts.len() > 2 {
                push(format!("{}-{}", parts[1], artifact_id));
            }
            if let Some(last) = parts.last() {
                push(format!("{}-{}", last, artifact_id));
            }
        }

        variants
    }

    /// Tests one `.pom` path against one variant.
    ///
    /// Accepted base names:
    /// - exact: `variant`
    /// - versioned: `variant-<version>`
    /// - versioned with artifact suffix: `variant-<version>-<artifactId>`
    pub fn matches(path: &Path, variant: &str, artifact_id: &str) -> bool {
        let Some(base_name) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".pom"))
        else {
            return false;
        };

        if base_name == variant {
            return true;
        }

        base_name
            .strip_prefix(variant)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| {
                VersionOrdering::looks_like_version(suffix)
                    || Self::is_versioned_artifact(suffix, artifact_id)
            })
    }

    /// True when the path matches any variant of `groupId:artifactId`.
    pub fn matches_any(path: &Path, group_id: &str, artifact_id: &str) -> bool {
        Self::variants(group_id, artifact_id)
            .iter()
            .any(|variant| Self::matches(path, variant, artifact_id))
    }

    fn is_versioned_artifact(suffix: &str, artifact_id: &str) -> bool {
        suffix
            .strip_suffix(artifact_id)
            .and_then(|rest| rest.strip_suffix('-'))
            .is_some_and(VersionOrdering::looks_like_version)
    }
}

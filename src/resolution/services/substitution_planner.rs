use crate::resolution::domain::{
    ArtifactKey, DeclaredDependency, MavenCoordinate, Substitution, SubstitutionReason,
    UNSPECIFIED_VERSION,
};
use crate::resolution::policies::VersionOrdering;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Decides which declared dependencies the host must redirect.
///
/// An installed system artifact takes precedence over a BOM-managed version.
/// Nothing is emitted when the target equals the requested version.
pub struct SubstitutionPlanner;

impl SubstitutionPlanner {
    pub fn plan(
        declared: &[DeclaredDependency],
        system_artifacts: &BTreeMap<ArtifactKey, MavenCoordinate>,
        managed_versions: &IndexMap<ArtifactKey, String>,
    ) -> Vec<Substitution> {
        let mut requested: BTreeMap<ArtifactKey, Vec<&str>> = BTreeMap::new();
        for dependency in declared {
            let versions = requested.entry(dependency.key()).or_default();
            if let Some(version) = dependency.version.as_deref() {
                versions.push(version);
            }
        }

        let mut substitutions = Vec::new();
        for (key, versions) in requested {
            let requested_version = VersionOrdering::max(versions.iter().copied())
                .unwrap_or(UNSPECIFIED_VERSION)
                .to_string();

            let (target, reason) = if let Some(system) = system_artifacts.get(&key) {
                (system.version.as_str(), SubstitutionReason::SystemOverride)
            } else if let Some(managed) = managed_versions.get(&key) {
                (managed.as_str(), SubstitutionReason::BomManaged)
            } else {
                continue;
            };

            if target.is_empty() || target == requested_version {
                continue;
            }

            substitutions.push(Substitution {
                key,
                requested_version,
                target_version: target.to_string(),
                reason,
            });
        }

        substitutions
    }
}

use crate::resolution::domain::{
    contains_placeholder, ArtifactKey, Packaging, PomHierarchy, PropertyMap, Scope,
};
use crate::resolution::services::PropertyResolver;
use indexmap::IndexMap;

/// One `<dependencyManagement>` entry after property substitution.
/// Only the fields the POM actually declared are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<Scope>,
    pub packaging: Option<Packaging>,
}

impl ManagedDependency {
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.group_id.clone(), self.artifact_id.clone())
    }

    /// A version that can be applied to a consumer: present and fully substituted.
    pub fn usable_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .filter(|v| !v.is_empty() && !contains_placeholder(v))
    }

    /// `groupId:artifactId:version`, with `unknown` for a missing version.
    pub fn describe(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or("unknown")
        )
    }
}

/// Managed entries keyed by identity, in first-declaration order.
pub type ManagedDependencies = IndexMap<ArtifactKey, ManagedDependency>;

/// Replays a hierarchy's dependencyManagement sections, ancestor first,
/// so a descendant's entry replaces its ancestor's for the same identity.
pub struct DependencyManagementResolver;

impl DependencyManagementResolver {
    pub fn resolve(hierarchy: &PomHierarchy, properties: &PropertyMap) -> ManagedDependencies {
        let mut managed = ManagedDependencies::new();

        for model in hierarchy.models() {
            for raw in &model.dependency_management {
                let group_id = PropertyResolver::substitute_opt(raw.group_id.as_deref(), properties);
                let artifact_id =
                    PropertyResolver::substitute_opt(raw.artifact_id.as_deref(), properties);
                let (Some(group_id), Some(artifact_id)) = (group_id, artifact_id) else {
                    tracing::debug!(
                        "Dropping managed entry without coordinates in {}",
                        model.path.display()
                    );
                    continue;
                };

                let entry = ManagedDependency {
                    version: PropertyResolver::substitute_opt(raw.version.as_deref(), properties),
                    scope: PropertyResolver::substitute_opt(raw.scope.as_deref(), properties)
                        .and_then(|s| Scope::parse(&s)),
                    packaging: PropertyResolver::substitute_opt(raw.packaging.as_deref(), properties)
                        .map(|p| Packaging::from_raw(&p)),
                    group_id,
                    artifact_id,
                };
                managed.insert(entry.key(), entry);
            }
        }

        managed
    }
}

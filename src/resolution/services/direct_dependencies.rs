use crate::resolution::domain::{
    contains_placeholder, ArtifactKey, MavenCoordinate, Packaging, PomHierarchy, PropertyMap,
    Scope,
};
use crate::resolution::services::{ManagedDependencies, PropertyResolver};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Declared dependencies of a POM, keyed by identity in declaration order.
pub type DirectDependencies = IndexMap<ArtifactKey, MavenCoordinate>;

/// DirectDependencyResolver collects declared dependencies across a hierarchy.
///
/// For every `<dependency>`, ancestor first:
/// 1. substitute properties
/// 2. fill version, scope and packaging gaps from the hierarchy's own
///    dependency management, then from externally managed (BOM) versions
/// 3. default scope to `compile` and packaging to `jar`
/// 4. upsert by identity, so a descendant declaration replaces its ancestor's
///
/// A version counts as a gap when it is absent or still holds a placeholder.
/// Explicit values are never overridden. Entries that end without a
/// groupId, artifactId or version are dropped.
pub struct DirectDependencyResolver;

impl DirectDependencyResolver {
    pub fn resolve(
        hierarchy: &PomHierarchy,
        properties: &PropertyMap,
        managed: &ManagedDependencies,
        external_versions: &HashMap<ArtifactKey, String>,
    ) -> DirectDependencies {
        let mut dependencies = DirectDependencies::new();

        for model in hierarchy.models() {
            for raw in &model.dependencies {
                let group_id = PropertyResolver::substitute_opt(raw.group_id.as_deref(), properties);
                let artifact_id =
                    PropertyResolver::substitute_opt(raw.artifact_id.as_deref(), properties);
                let (Some(group_id), Some(artifact_id)) = (group_id, artifact_id) else {
                    continue;
                };
                let key = ArtifactKey::new(group_id.clone(), artifact_id.clone());
                let management = managed.get(&key);

                let declared_version =
                    PropertyResolver::substitute_opt(raw.version.as_deref(), properties);
                let version = match declared_version {
                    Some(v) if !contains_placeholder(&v) => Some(v),
                    unresolved => management
                        .and_then(|m| m.usable_version())
                        .map(str::to_string)
                        .or_else(|| external_versions.get(&key).cloned())
                        .or(unresolved),
                };
                let Some(version) = version else {
                    tracing::debug!(
                        "Dropping {} in {}: no version after management",
                        key,
                        model.path.display()
                    );
                    continue;
                };

                let scope = PropertyResolver::substitute_opt(raw.scope.as_deref(), properties)
                    .and_then(|s| Scope::parse(&s))
                    .or_else(|| management.and_then(|m| m.scope))
                    .unwrap_or_default();
                let packaging = PropertyResolver::substitute_opt(raw.packaging.as_deref(), properties)
                    .map(|p| Packaging::from_raw(&p))
                    .or_else(|| management.and_then(|m| m.packaging.clone()))
                    .unwrap_or_default();

                let coordinate = MavenCoordinate::new(group_id, artifact_id, version)
                    .with_scope(scope)
                    .with_packaging(packaging);
                dependencies.insert(key, coordinate);
            }
        }

        dependencies
    }
}

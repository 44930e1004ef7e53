use crate::resolution::domain::{ArtifactKey, DeclaredDependency, MavenCoordinate, Substitution};
use std::collections::BTreeMap;

/// ResolutionConsumer port implemented by the environment hosting a resolution
///
/// The core never touches build-tool internals. It asks the host for its
/// declared dependencies and hands back resolved coordinates and version
/// substitutions through this interface.
pub trait ResolutionConsumer {
    /// Enumerates the dependencies the host build declares
    fn declared_dependencies(&self) -> Vec<DeclaredDependency>;

    /// Enumerates the plugin ids the host build applies
    fn declared_plugins(&self) -> Vec<String> {
        Vec::new()
    }

    /// Accepts the final `groupId:artifactId -> coordinate` map
    ///
    /// Called once per resolution, before any substitution.
    fn accept_resolved(&mut self, resolved: &BTreeMap<ArtifactKey, MavenCoordinate>);

    /// Accepts one instruction to redirect a declared dependency to another version
    fn accept_substitution(&mut self, substitution: &Substitution);
}

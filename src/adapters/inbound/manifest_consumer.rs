use crate::ports::inbound::ResolutionConsumer;
use crate::resolution::domain::{ArtifactKey, DeclaredDependency, MavenCoordinate, Substitution};
use std::collections::BTreeMap;

/// Host for command-line runs: the declarations come from flags and the
/// config file, and whatever the resolver hands back is kept for printing.
#[derive(Debug, Default, Clone)]
pub struct ManifestConsumer {
    dependencies: Vec<DeclaredDependency>,
    plugins: Vec<String>,
    resolved: BTreeMap<ArtifactKey, MavenCoordinate>,
    substitutions: Vec<Substitution>,
}

impl ManifestConsumer {
    pub fn new(dependencies: Vec<DeclaredDependency>, plugins: Vec<String>) -> Self {
        Self {
            dependencies,
            plugins,
            ..Self::default()
        }
    }

    pub fn resolved(&self) -> &BTreeMap<ArtifactKey, MavenCoordinate> {
        &self.resolved
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// One line per substitution, in the order they were received.
    pub fn instructions(&self) -> Vec<String> {
        self.substitutions.iter().map(ToString::to_string).collect()
    }
}

impl ResolutionConsumer for ManifestConsumer {
    fn declared_dependencies(&self) -> Vec<DeclaredDependency> {
        self.dependencies.clone()
    }

    fn declared_plugins(&self) -> Vec<String> {
        self.plugins.clone()
    }

    fn accept_resolved(&mut self, resolved: &BTreeMap<ArtifactKey, MavenCoordinate>) {
        tracing::debug!("Host received {} resolved coordinates", resolved.len());
        self.resolved = resolved.clone();
    }

    fn accept_substitution(&mut self, substitution: &Substitution) {
        tracing::debug!("{}", substitution);
        self.substitutions.push(substitution.clone());
    }
}

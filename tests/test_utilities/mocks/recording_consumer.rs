use std::collections::BTreeMap;
use sysdeps::prelude::*;

/// ResolutionConsumer that records every call in order
#[derive(Default)]
pub struct RecordingConsumer {
    pub declared: Vec<DeclaredDependency>,
    pub plugins: Vec<String>,
    pub resolved: Option<BTreeMap<ArtifactKey, MavenCoordinate>>,
    pub substitutions: Vec<Substitution>,
    pub calls: Vec<&'static str>,
}

impl RecordingConsumer {
    pub fn new(declared: Vec<DeclaredDependency>) -> Self {
        Self {
            declared,
            ..Self::default()
        }
    }
}

impl ResolutionConsumer for RecordingConsumer {
    fn declared_dependencies(&self) -> Vec<DeclaredDependency> {
        self.declared.clone()
    }

    fn declared_plugins(&self) -> Vec<String> {
        self.plugins.clone()
    }

    fn accept_resolved(&mut self, resolved: &BTreeMap<ArtifactKey, MavenCoordinate>) {
        self.calls.push("resolved");
        self.resolved = Some(resolved.clone());
    }

    fn accept_substitution(&mut self, substitution: &Substitution) {
        self.calls.push("substitution");
        self.substitutions.push(substitution.clone());
    }
}

use std::collections::HashSet;
use sysdeps::prelude::*;

/// Mock ArtifactVerifier with an explicit set of installed jars
#[derive(Default, Clone)]
pub struct MockArtifactVerifier {
    installed: HashSet<ArtifactKey>,
}

impl MockArtifactVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, group_id: &str, artifact_id: &str) -> Self {
        self.install(group_id, artifact_id);
        self
    }

    pub fn install(&mut self, group_id: &str, artifact_id: &str) {
        self.installed.insert(ArtifactKey::new(group_id, artifact_id));
    }
}

impl ArtifactVerifier for MockArtifactVerifier {
    fn exists(&self, coordinate: &MavenCoordinate) -> bool {
        self.installed.contains(&coordinate.key())
    }
}

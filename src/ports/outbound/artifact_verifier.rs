use crate::resolution::domain::MavenCoordinate;

/// ArtifactVerifier port for confirming a coordinate's binary is installed
pub trait ArtifactVerifier: Send + Sync {
    /// Returns true when the artifact behind `coordinate` is present on disk.
    /// pom-packaged coordinates are always present.
    fn exists(&self, coordinate: &MavenCoordinate) -> bool;
}

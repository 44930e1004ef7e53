use serde::{Serialize, Serializer};
use std::fmt;

/// Why a dependency edge was not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Test-scoped edge
    Test,
    /// groupId, artifactId or version still carries `${...}`
    Placeholder,
    /// pom-packaged dependency or BOM
    Bom,
    /// No POM located for the identity
    NotFound,
    /// POM located but no jar on disk
    ArtifactMissing,
    /// Provided-scope edge to an identity that is not a known system artifact
    Provided,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Test => "Test",
            SkipReason::Placeholder => "Placeholder",
            SkipReason::Bom => "BOM",
            SkipReason::NotFound => "Not found",
            SkipReason::ArtifactMissing => "Artifact missing",
            SkipReason::Provided => "Provided",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

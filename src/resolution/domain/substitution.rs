use super::ArtifactKey;
use serde::Serialize;
use std::fmt;

/// Placeholder for a declared dependency that named no version.
pub const UNSPECIFIED_VERSION: &str = "(unspecified)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionReason {
    /// An installed system artifact replaces the requested version
    SystemOverride,
    /// A BOM pins the version
    BomManaged,
}

impl SubstitutionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionReason::SystemOverride => "system-override",
            SubstitutionReason::BomManaged => "bom-managed",
        }
    }
}

/// Instruction for the host: request `key` at `target_version` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub key: ArtifactKey,
    pub requested_version: String,
    pub target_version: String,
    pub reason: SubstitutionReason,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SubstitutionReason::SystemOverride => write!(
                f,
                "Override version: {}:{} -> {}",
                self.key, self.requested_version, self.target_version
            ),
            SubstitutionReason::BomManaged => {
                write!(f, "Apply BOM version: {}:{}", self.key, self.target_version)
            }
        }
    }
}

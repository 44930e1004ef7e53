use super::{ArtifactKey, MavenCoordinate};
use crate::shared::Result;
use serde::Serialize;
use std::fmt;

/// A dependency as the host build declares it, before any resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredDependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Declared only in a test configuration
    pub test_only: bool,
}

impl DeclaredDependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            test_only: false,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn test_only(mut self) -> Self {
        self.test_only = true;
        self
    }

    /// Parses `groupId:artifactId[:version]`.
    pub fn parse(value: &str, test_only: bool) -> Result<Self> {
        let coordinate = MavenCoordinate::parse(value)?;
        let mut declared = Self::new(coordinate.group_id, coordinate.artifact_id);
        if !coordinate.version.is_empty() {
            declared.version = Some(coordinate.version);
        }
        declared.test_only = test_only;
        Ok(declared)
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.group_id.clone(), self.artifact_id.clone())
    }
}

impl fmt::Display for DeclaredDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group_id, self.artifact_id, version),
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
        }
    }
}

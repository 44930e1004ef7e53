use crate::resolution::domain::contains_placeholder;
use crate::shared::error::ResolverError;
use crate::shared::Result;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Applicability of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Runtime,
    Provided,
    Test,
    System,
    Import,
}

impl Scope {
    /// Parses a scope name, ignoring case and surrounding whitespace.
    /// Returns `None` for unknown names and for unresolved placeholders.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compile" => Some(Scope::Compile),
            "runtime" => Some(Scope::Runtime),
            "provided" => Some(Scope::Provided),
            "test" => Some(Scope::Test),
            "system" => Some(Scope::System),
            "import" => Some(Scope::Import),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Provided => "provided",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artifact packaging (`<packaging>` in a POM, `<type>` on a dependency).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Packaging {
    #[default]
    Jar,
    Pom,
    Other(String),
}

impl Packaging {
    pub fn from_raw(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("jar") {
            Packaging::Jar
        } else if trimmed.eq_ignore_ascii_case("pom") {
            Packaging::Pom
        } else {
            Packaging::Other(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Packaging::Jar => "jar",
            Packaging::Pom => "pom",
            Packaging::Other(value) => value,
        }
    }

    pub fn is_pom(&self) -> bool {
        matches!(self, Packaging::Pom)
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Packaging {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Artifact identity: `groupId:artifactId`.
///
/// Two coordinates describe the same artifact iff their keys are equal,
/// whatever their version or scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    group_id: String,
    artifact_id: String,
}

impl ArtifactKey {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn has_placeholder(&self) -> bool {
        contains_placeholder(&self.group_id) || contains_placeholder(&self.artifact_id)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for ArtifactKey {
    type Err = ResolverError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(2, ':');
        let group_id = parts.next().unwrap_or_default().trim();
        let artifact_id = parts.next().unwrap_or_default().trim();
        if group_id.is_empty() || artifact_id.is_empty() || artifact_id.contains(':') {
            return Err(ResolverError::InvalidCoordinate {
                value: s.to_string(),
                reason: "expected groupId:artifactId".to_string(),
            });
        }
        Ok(Self::new(group_id, artifact_id))
    }
}

impl Serialize for ArtifactKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved (or partially resolved) Maven coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: Packaging,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub test_context: bool,
}

impl MavenCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: Packaging::Jar,
            scope: Scope::Compile,
            pom_path: None,
            test_context: false,
        }
    }

    pub fn with_packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = packaging;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_pom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pom_path = Some(path.into());
        self
    }

    pub fn in_test_context(mut self, test_context: bool) -> Self {
        self.test_context = test_context;
        self
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.group_id.clone(), self.artifact_id.clone())
    }

    /// `groupId:artifactId:version`
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// groupId, artifactId and version are all non-empty.
    pub fn is_valid(&self) -> bool {
        !self.group_id.trim().is_empty()
            && !self.artifact_id.trim().is_empty()
            && !self.version.trim().is_empty()
    }

    pub fn has_placeholder(&self) -> bool {
        contains_placeholder(&self.group_id)
            || contains_placeholder(&self.artifact_id)
            || contains_placeholder(&self.version)
    }

    pub fn is_pom(&self) -> bool {
        self.packaging.is_pom()
    }

    /// Parses `groupId:artifactId[:version]`. A missing version stays empty.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.trim().split(':').map(str::trim).collect();
        let invalid = |reason: &str| ResolverError::InvalidCoordinate {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        match parts.as_slice() {
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact, ""))
            }
            [group, artifact, version] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact, *version))
            }
            [_] => Err(invalid("missing artifactId").into()),
            _ => Err(invalid("expected groupId:artifactId[:version]").into()),
        }
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.gav())
    }
}

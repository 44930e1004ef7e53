use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// `<parent>` reference of a POM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentRef {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// A `<dependency>` element as written, before any substitution or defaulting.
///
/// Used for both `<dependencies>` and `<dependencyManagement>` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
    /// `<type>`; maps onto packaging.
    pub packaging: Option<String>,
}

impl RawDependency {
    pub fn new(group_id: &str, artifact_id: &str) -> Self {
        Self {
            group_id: Some(group_id.to_string()),
            artifact_id: Some(artifact_id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_packaging(mut self, packaging: &str) -> Self {
        self.packaging = Some(packaging.to_string());
        self
    }
}

/// Structural view of a single POM file. Values are raw: placeholders are
/// left untouched and nothing is inherited from the parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PomModel {
    pub path: PathBuf,
    pub parent: Option<ParentRef>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub properties: HashMap<String, String>,
    pub dependencies: Vec<RawDependency>,
    pub dependency_management: Vec<RawDependency>,
}

impl PomModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Own groupId, falling back to the parent's.
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.group_id.as_deref()))
    }

    /// Own version, falling back to the parent's.
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.version.as_deref()))
    }

    pub fn parent_artifact_id(&self) -> Option<&str> {
        self.parent.as_ref().and_then(|p| p.artifact_id.as_deref())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.path.parent()
    }
}

/// Ordered POM chain, ancestor-most first, ending with the POM it was
/// loaded from.
#[derive(Debug, Clone, Default)]
pub struct PomHierarchy {
    models: Vec<Arc<PomModel>>,
}

impl PomHierarchy {
    /// Builds a hierarchy from models already in ancestor-first order.
    pub fn new(models: Vec<Arc<PomModel>>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &[Arc<PomModel>] {
        &self.models
    }

    /// The descendant the hierarchy was loaded for.
    pub fn leaf(&self) -> Option<&PomModel> {
        self.models.last().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

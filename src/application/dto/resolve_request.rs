use crate::resolution::domain::DeclaredDependency;

/// Suffix of the marker artifact through which a plugin id is published.
pub const PLUGIN_MARKER_SUFFIX: &str = ".gradle.plugin";

/// ResolveRequest - what the host build declares
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// Declared dependencies, test-only ones flagged
    pub dependencies: Vec<DeclaredDependency>,
    /// Plugin ids applied by the build
    pub plugins: Vec<String>,
}

impl ResolveRequest {
    pub fn new(dependencies: Vec<DeclaredDependency>, plugins: Vec<String>) -> Self {
        Self {
            dependencies,
            plugins,
        }
    }

    /// Declared dependencies followed by one marker identity per plugin
    /// (`<id>:<id>.gradle.plugin`).
    pub fn declared(&self) -> Vec<DeclaredDependency> {
        let markers = self
            .plugins
            .iter()
            .map(|id| DeclaredDependency::new(id.as_str(), format!("{}{}", id, PLUGIN_MARKER_SUFFIX)));
        self.dependencies.iter().cloned().chain(markers).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.plugins.is_empty()
    }
}

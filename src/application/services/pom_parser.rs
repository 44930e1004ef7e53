use crate::application::services::{HierarchyLoader, ResolutionCache};
use crate::ports::outbound::PomReader;
use crate::resolution::domain::{
    ArtifactKey, MavenCoordinate, Packaging, PomHierarchy, PomModel, PropertyMap,
};
use crate::resolution::policies::PropertyPrecedence;
use crate::resolution::services::{
    DependencyManagementResolver, DirectDependencies, DirectDependencyResolver,
    ManagedDependencies, PropertyResolver,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

/// BOM-managed versions applied on top of a POM's own management.
///
/// The fingerprint identifies the version set in the session cache.
#[derive(Debug, Clone, Default)]
pub struct ExternalVersions {
    versions: HashMap<ArtifactKey, String>,
    fingerprint: u64,
}

impl ExternalVersions {
    pub fn new(versions: HashMap<ArtifactKey, String>) -> Self {
        let mut entries: Vec<(&ArtifactKey, &String)> = versions.iter().collect();
        entries.sort();
        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        let fingerprint = hasher.finish();
        Self {
            versions,
            fingerprint,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains_key(&self, key: &ArtifactKey) -> bool {
        self.versions.contains_key(key)
    }

    pub fn versions(&self) -> &HashMap<ArtifactKey, String> {
        &self.versions
    }
}

impl From<HashMap<ArtifactKey, String>> for ExternalVersions {
    fn from(versions: HashMap<ArtifactKey, String>) -> Self {
        Self::new(versions)
    }
}

/// PomParser - one pipeline from a POM path to resolved metadata
///
/// Hierarchy loading, property collection, dependency management and
/// direct dependencies are computed lazily and memoized in the session's
/// [`ResolutionCache`]. Every accessor degrades to an empty result when the
/// POM cannot be read.
pub struct PomParser<R: PomReader> {
    reader: R,
    cache: Arc<ResolutionCache>,
    property_resolver: PropertyResolver,
}

impl<R: PomReader> PomParser<R> {
    pub fn new(reader: R, cache: Arc<ResolutionCache>, precedence: PropertyPrecedence) -> Self {
        Self {
            reader,
            cache,
            property_resolver: PropertyResolver::new(precedence),
        }
    }

    /// A parser with its own fresh cache and the default precedence.
    pub fn with_fresh_cache(reader: R) -> Self {
        Self::new(
            reader,
            Arc::new(ResolutionCache::new()),
            PropertyPrecedence::default(),
        )
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    fn loader(&self) -> HierarchyLoader<'_, R> {
        HierarchyLoader::new(&self.reader, &self.cache)
    }

    pub fn model(&self, path: &Path) -> Option<Arc<PomModel>> {
        self.loader().model(path)
    }

    pub fn hierarchy(&self, path: &Path) -> Arc<PomHierarchy> {
        self.loader().load(path)
    }

    pub fn properties(&self, path: &Path) -> Arc<PropertyMap> {
        ResolutionCache::memoize(&self.cache.properties, path, || {
            Arc::new(self.property_resolver.collect(&self.hierarchy(path)))
        })
    }

    pub fn dependency_management(&self, path: &Path) -> Arc<ManagedDependencies> {
        ResolutionCache::memoize(&self.cache.management, path, || {
            let hierarchy = self.hierarchy(path);
            let properties = self.properties(path);
            Arc::new(DependencyManagementResolver::resolve(&hierarchy, &properties))
        })
    }

    /// Declared dependencies with the hierarchy's own management applied.
    pub fn dependencies(&self, path: &Path) -> Arc<DirectDependencies> {
        ResolutionCache::memoize(&self.cache.dependencies, path, || {
            Arc::new(self.resolve_dependencies(path, &HashMap::new()))
        })
    }

    /// Declared dependencies, with externally managed (BOM) versions filling
    /// whatever the hierarchy's own management leaves open.
    pub fn dependencies_with(
        &self,
        path: &Path,
        external: &ExternalVersions,
    ) -> Arc<DirectDependencies> {
        if external.is_empty() {
            return self.dependencies(path);
        }
        let key = (path.to_path_buf(), external.fingerprint);
        ResolutionCache::memoize(&self.cache.bom_dependencies, &key, || {
            Arc::new(self.resolve_dependencies(path, external.versions()))
        })
    }

    fn resolve_dependencies(
        &self,
        path: &Path,
        external_versions: &HashMap<ArtifactKey, String>,
    ) -> DirectDependencies {
        let hierarchy = self.hierarchy(path);
        let properties = self.properties(path);
        let managed = self.dependency_management(path);
        DirectDependencyResolver::resolve(&hierarchy, &properties, &managed, external_versions)
    }

    /// Effective coordinate of the POM itself: groupId and version inherited
    /// from the parent reference when absent, properties substituted.
    pub fn coordinate(&self, path: &Path) -> Option<MavenCoordinate> {
        ResolutionCache::memoize(&self.cache.coordinates, path, || {
            let hierarchy = self.hierarchy(path);
            let leaf = hierarchy.leaf()?;
            let properties = self.properties(path);

            let group_id = PropertyResolver::substitute_opt(leaf.effective_group_id(), &properties)?;
            let artifact_id =
                PropertyResolver::substitute_opt(leaf.artifact_id.as_deref(), &properties)?;
            let version = PropertyResolver::substitute_opt(leaf.effective_version(), &properties)
                .unwrap_or_default();
            let packaging = PropertyResolver::substitute_opt(leaf.packaging.as_deref(), &properties)
                .map(|p| Packaging::from_raw(&p))
                .unwrap_or_default();

            Some(
                MavenCoordinate::new(group_id, artifact_id, version)
                    .with_packaging(packaging)
                    .with_pom_path(path),
            )
        })
    }

    /// A BOM is pom-packaged and declares its own dependencyManagement.
    pub fn is_bom(&self, path: &Path) -> bool {
        let Some(model) = self.model(path) else {
            return false;
        };
        let packaging = model
            .packaging
            .as_deref()
            .map(|p| PropertyResolver::substitute(p, &self.properties(path)))
            .map(|p| Packaging::from_raw(&p))
            .unwrap_or_default();
        packaging.is_pom() && !model.dependency_management.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::PomFileReader;
    use crate::resolution::domain::Scope;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("acme-parent.pom"),
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <groupId>com.acme</groupId>
  <artifactId>acme-parent</artifactId>
  <version>4.2</version>
  <packaging>pom</packaging>
  <properties><netty.version>4.1.100</netty.version></properties>
  <dependencyManagement><dependencies>
    <dependency><groupId>io.netty</groupId><artifactId>netty-buffer</artifactId><version>${netty.version}</version></dependency>
    <dependency><groupId>junit</groupId><artifactId>junit</artifactId><version>4.13.2</version><scope>test</scope></dependency>
  </dependencies></dependencyManagement>
</project>"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("acme-core.pom"),
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <parent><groupId>com.acme</groupId><artifactId>acme-parent</artifactId><version>4.2</version></parent>
  <artifactId>acme-core</artifactId>
  <dependencies>
    <dependency><groupId>io.netty</groupId><artifactId>netty-buffer</artifactId></dependency>
    <dependency><groupId>junit</groupId><artifactId>junit</artifactId></dependency>
    <dependency><groupId>${project.groupId}</groupId><artifactId>acme-api</artifactId><version>${project.version}</version></dependency>
  </dependencies>
</project>"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_dependencies_use_inherited_management_and_properties() {
        let dir = fixture();
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        let deps = parser.dependencies(&dir.path().join("acme-core.pom"));

        assert_eq!(deps.len(), 3);
        assert_eq!(
            deps[&ArtifactKey::new("io.netty", "netty-buffer")].version,
            "4.1.100"
        );
        assert_eq!(deps[&ArtifactKey::new("junit", "junit")].scope, Scope::Test);
        assert_eq!(
            deps[&ArtifactKey::new("com.acme", "acme-api")].gav(),
            "com.acme:acme-api:4.2"
        );
    }

    #[test]
    fn test_coordinate_inherits_group_and_version() {
        let dir = fixture();
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        let path = dir.path().join("acme-core.pom");
        let coordinate = parser.coordinate(&path).unwrap();

        assert_eq!(coordinate.gav(), "com.acme:acme-core:4.2");
        assert_eq!(coordinate.packaging, Packaging::Jar);
        assert_eq!(coordinate.pom_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_is_bom() {
        let dir = fixture();
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        assert!(parser.is_bom(&dir.path().join("acme-parent.pom")));
        assert!(!parser.is_bom(&dir.path().join("acme-core.pom")));
        assert!(!parser.is_bom(&dir.path().join("absent.pom")));
    }

    #[test]
    fn test_external_versions_fill_remaining_gaps() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("root.pom"),
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1</version>\
             <dependencies><dependency><groupId>d</groupId><artifactId>a</artifactId>\
             <version>${d.version}</version><scope>compile</scope></dependency></dependencies></project>",
        )
        .unwrap();
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        let path = dir.path().join("root.pom");

        let mut bom_versions = HashMap::new();
        bom_versions.insert(ArtifactKey::new("d", "a"), "2.0".to_string());
        let bom_versions = ExternalVersions::new(bom_versions);

        let without = parser.dependencies_with(&path, &ExternalVersions::default());
        assert_eq!(without[&ArtifactKey::new("d", "a")].version, "${d.version}");
        let with = parser.dependencies_with(&path, &bom_versions);
        assert_eq!(with[&ArtifactKey::new("d", "a")].gav(), "d:a:2.0");
    }

    #[test]
    fn test_external_version_results_are_memoized_per_version_set() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("root.pom"),
            "<project><groupId>g</groupId><artifactId>root</artifactId><version>1</version>\
             <dependencies><dependency><groupId>d</groupId><artifactId>a</artifactId>\
             </dependency></dependencies></project>",
        )
        .unwrap();
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        let path = dir.path().join("root.pom");
        let versions = |version: &str| {
            ExternalVersions::new(HashMap::from([(
                ArtifactKey::new("d", "a"),
                version.to_string(),
            )]))
        };

        let first = parser.dependencies_with(&path, &versions("2.0"));
        let again = parser.dependencies_with(&path, &versions("2.0"));
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(parser.cache().bom_dependency_count(), 1);

        let other = parser.dependencies_with(&path, &versions("3.0"));
        assert_eq!(other[&ArtifactKey::new("d", "a")].version, "3.0");
        assert_eq!(first[&ArtifactKey::new("d", "a")].version, "2.0");
        assert_eq!(parser.cache().bom_dependency_count(), 2);
    }

    #[test]
    fn test_unreadable_pom_degrades_to_empty() {
        let parser = PomParser::with_fresh_cache(PomFileReader::new());
        let path = Path::new("/nonexistent/x.pom");
        assert!(parser.hierarchy(path).is_empty());
        assert!(parser.dependencies(path).is_empty());
        assert!(parser.coordinate(path).is_none());
    }
}

use super::mocks::*;
use std::path::PathBuf;
use std::sync::Arc;
use sysdeps::prelude::*;

/// Directory the in-memory POMs pretend to live in.
pub const REPO_DIR: &str = "/repo";

pub fn pom_path(artifact_id: &str) -> PathBuf {
    PathBuf::from(REPO_DIR).join(format!("{}.pom", artifact_id))
}

/// `<dependency>` element; empty version or scope are left out.
pub fn dependency(group_id: &str, artifact_id: &str, version: &str, scope: &str) -> String {
    let mut xml = format!(
        "<dependency><groupId>{}</groupId><artifactId>{}</artifactId>",
        group_id, artifact_id
    );
    if !version.is_empty() {
        xml.push_str(&format!("<version>{}</version>", version));
    }
    if !scope.is_empty() {
        xml.push_str(&format!("<scope>{}</scope>", scope));
    }
    xml.push_str("</dependency>");
    xml
}

/// A `<project>` with the given coordinates and extra body elements.
pub fn project(group_id: &str, artifact_id: &str, version: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{}</groupId>
  <artifactId>{}</artifactId>
  <version>{}</version>
  {}
</project>"#,
        group_id, artifact_id, version, body
    )
}

/// In-memory system installation: POM documents, finder entries and jars.
#[derive(Default)]
pub struct Repository {
    pub reader: MockPomReader,
    pub finder: MockPomFinder,
    pub verifier: MockArtifactVerifier,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a jar-packaged artifact with its POM and jar.
    pub fn artifact(mut self, gav: &str, body: &str) -> Self {
        let coordinate = self.register(gav, Packaging::Jar, body);
        self.verifier
            .install(&coordinate.group_id, &coordinate.artifact_id);
        self
    }

    /// Installs a POM whose jar is missing.
    pub fn pom_without_jar(mut self, gav: &str, body: &str) -> Self {
        self.register(gav, Packaging::Jar, body);
        self
    }

    /// Installs a BOM managing the given `g:a:v` entries.
    pub fn bom(mut self, gav: &str, managed: &[&str]) -> Self {
        let entries: String = managed
            .iter()
            .map(|entry| {
                let parts: Vec<&str> = entry.split(':').collect();
                dependency(parts[0], parts[1], parts[2], "")
            })
            .collect();
        let body = format!(
            "<packaging>pom</packaging><dependencyManagement><dependencies>{}</dependencies></dependencyManagement>",
            entries
        );
        self.register(gav, Packaging::from_raw("pom"), &body);
        self
    }

    /// Adds a raw document without a finder entry (parents, broken files).
    pub fn document(mut self, artifact_id: &str, xml: &str) -> Self {
        self.reader.insert(pom_path(artifact_id), xml);
        self
    }

    fn register(&mut self, gav: &str, packaging: Packaging, body: &str) -> MavenCoordinate {
        let coordinate = MavenCoordinate::parse(gav).unwrap();
        let path = pom_path(&coordinate.artifact_id);
        self.reader.insert(
            &path,
            project(
                &coordinate.group_id,
                &coordinate.artifact_id,
                &coordinate.version,
                body,
            ),
        );
        let coordinate = coordinate.with_packaging(packaging).with_pom_path(path);
        self.finder.push(coordinate.clone());
        coordinate
    }

    pub fn parser(&self) -> Arc<PomParser<MockPomReader>> {
        Arc::new(PomParser::with_fresh_cache(self.reader.clone()))
    }

    pub fn use_case(
        self,
        reporter: MockProgressReporter,
    ) -> ResolveDependenciesUseCase<MockPomReader, MockPomFinder, MockArtifactVerifier, MockProgressReporter>
    {
        let parser = self.parser();
        ResolveDependenciesUseCase::new(parser, self.finder, self.verifier, reporter)
    }
}

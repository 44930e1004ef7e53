use super::file_walker::collect_files;
use crate::ports::outbound::ArtifactVerifier;
use crate::resolution::domain::MavenCoordinate;
use std::path::{Path, PathBuf};

/// JarArtifactVerifier adapter looking for installed jars
///
/// Lookup order for a jar-packaged coordinate:
/// 1. `<jars_dir>/<artifactId>.jar`
/// 2. `<jars_dir>/<artifactId>-<version>.jar`
/// 3. a scan up to `scan_depth` levels for `<artifactId>.jar`, or for
///    `<artifactId>-<suffix>.jar` where the suffix equals the version or
///    contains at least one digit
///
/// The digit rule is deliberately loose: distribution jar names are
/// inconsistent, and a false positive costs less than a missed artifact.
pub struct JarArtifactVerifier {
    jars_dir: PathBuf,
    scan_depth: usize,
}

impl JarArtifactVerifier {
    pub fn new(jars_dir: PathBuf, scan_depth: usize) -> Self {
        Self {
            jars_dir,
            scan_depth,
        }
    }

    fn matches_scanned(path: &Path, artifact_id: &str, version: &str) -> bool {
        let Some(stem) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".jar"))
        else {
            return false;
        };

        if stem == artifact_id {
            return true;
        }

        stem.strip_prefix(artifact_id)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| {
                suffix == version || suffix.chars().any(|c| c.is_ascii_digit())
            })
    }
}

impl ArtifactVerifier for JarArtifactVerifier {
    fn exists(&self, coordinate: &MavenCoordinate) -> bool {
        if coordinate.is_pom() {
            return true;
        }

        if !self.jars_dir.is_dir() {
            return false;
        }

        let artifact_id = coordinate.artifact_id.as_str();
        let version = coordinate.version.as_str();

        if self.jars_dir.join(format!("{}.jar", artifact_id)).is_file() {
            return true;
        }
        if !version.is_empty()
            && self
                .jars_dir
                .join(format!("{}-{}.jar", artifact_id, version))
                .is_file()
        {
            return true;
        }

        let found = collect_files(std::slice::from_ref(&self.jars_dir), self.scan_depth, "jar")
            .iter()
            .any(|path| Self::matches_scanned(path, artifact_id, version));

        if !found {
            tracing::debug!("No jar found for {} under {}", coordinate, self.jars_dir.display());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::domain::Packaging;
    use std::fs;
    use tempfile::TempDir;

    fn verifier(dir: &Path) -> JarArtifactVerifier {
        JarArtifactVerifier::new(dir.to_path_buf(), 3)
    }

    #[test]
    fn test_versioned_jar_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo-1.2.3.jar"), "").unwrap();

        assert!(verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "1.2.3")));
    }

    #[test]
    fn test_non_version_suffix_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo-bar.jar"), "").unwrap();

        assert!(!verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "1.2.3")));
    }

    #[test]
    fn test_plain_jar_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.jar"), "").unwrap();

        assert!(verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "9")));
    }

    #[test]
    fn test_nested_jar_with_digit_suffix_is_found() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("foo");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("foo-2.jar"), "").unwrap();

        assert!(verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "1.0")));
    }

    #[test]
    fn test_nested_plain_jar_is_found() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("foo");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("foo.jar"), "").unwrap();

        assert!(verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "1.0")));
    }

    #[test]
    fn test_pom_packaging_is_always_present() {
        let verifier = JarArtifactVerifier::new(PathBuf::from("/nonexistent/java"), 3);
        let bom = MavenCoordinate::new("g", "bom", "1").with_packaging(Packaging::Pom);
        assert!(verifier.exists(&bom));
    }

    #[test]
    fn test_missing_directory_means_absent() {
        let verifier = JarArtifactVerifier::new(PathBuf::from("/nonexistent/java"), 3);
        assert!(!verifier.exists(&MavenCoordinate::new("g", "foo", "1")));
    }

    #[test]
    fn test_depth_bound_applies_to_scan() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("foo-1.0.jar"), "").unwrap();

        assert!(!verifier(dir.path()).exists(&MavenCoordinate::new("g", "foo", "1.0")));
    }
}

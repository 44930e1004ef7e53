use crate::resolution::domain::MavenCoordinate;

/// PomFinder port for locating installed POM files by identity
///
/// Returned coordinates carry the `pom_path` they were read from.
pub trait PomFinder: Send + Sync {
    /// Locates the POM for `groupId:artifactId`
    ///
    /// # Returns
    /// The coordinate read from the matching POM, or None when nothing on disk
    /// matches. I/O failures are logged and reported as None.
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<MavenCoordinate>;

    /// Lists every POM whose groupId equals `group_id`
    fn find_all_for_group(&self, group_id: &str) -> Vec<MavenCoordinate>;
}

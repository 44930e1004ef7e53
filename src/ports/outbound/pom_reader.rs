use crate::resolution::domain::PomModel;
use crate::shared::Result;
use std::path::Path;

/// PomReader port for turning one POM file into a structural model
///
/// Implementations are stateless and perform no caching.
pub trait PomReader: Send + Sync {
    /// Reads and parses the POM at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not well-formed XML,
    /// or has no `<project>` root element. Callers treat an error as
    /// "no data available" for that path.
    fn read_pom(&self, path: &Path) -> Result<PomModel>;
}

/// Filesystem adapters: POM reading, POM lookup, jar verification and report output
mod directory_pom_finder;
mod file_walker;
mod file_writer;
mod jar_artifact_verifier;
mod pom_file_reader;
mod pom_index;

pub use directory_pom_finder::DirectoryPomFinder;
pub use file_walker::{collect_files, DEFAULT_SCAN_DEPTH};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use jar_artifact_verifier::JarArtifactVerifier;
pub use pom_file_reader::PomFileReader;
pub use pom_index::PomIndex;

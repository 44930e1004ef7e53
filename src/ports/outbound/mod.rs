/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses
/// to reach the file system and the console.
pub mod artifact_verifier;
pub mod output_presenter;
pub mod pom_finder;
pub mod pom_reader;
pub mod progress_reporter;
pub mod report_formatter;

pub use artifact_verifier::ArtifactVerifier;
pub use output_presenter::OutputPresenter;
pub use pom_finder::PomFinder;
pub use pom_reader::PomReader;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;

/// Mock implementations for testing
mod mock_artifact_verifier;
mod mock_pom_finder;
mod mock_pom_reader;
mod mock_progress_reporter;
mod recording_consumer;

pub use mock_artifact_verifier::MockArtifactVerifier;
pub use mock_pom_finder::MockPomFinder;
pub use mock_pom_reader::MockPomReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use recording_consumer::RecordingConsumer;

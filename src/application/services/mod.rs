/// Application services - the stateful resolution pipeline
///
/// These services own I/O through ports and the session cache; the pure
/// folding rules they apply live in `resolution::services`.
pub mod artifact_scanner;
pub mod bom_processor;
pub mod bulk_classifier;
pub mod hierarchy_loader;
pub mod plugin_matcher;
pub mod pom_parser;
pub mod resolution_cache;
pub mod transitive_resolver;

pub use artifact_scanner::{ArtifactScan, ArtifactScanner};
pub use bom_processor::{BomProcessingResult, BomProcessor};
pub use bulk_classifier::{BulkClassification, BulkClassifier};
pub use hierarchy_loader::{HierarchyLoader, MAX_HIERARCHY_DEPTH};
pub use plugin_matcher::{PluginMatcher, PluginResolution};
pub use pom_parser::{ExternalVersions, PomParser};
pub use resolution_cache::ResolutionCache;
pub use transitive_resolver::{TransitiveResolution, TransitiveResolver};

//! sysdeps - resolve Maven dependencies against locally installed artifacts
//!
//! Given a set of declared `groupId:artifactId` identities, this library
//! locates their POM files under system directories, resolves versions
//! through parent POMs, properties, dependencyManagement and BOMs, walks the
//! transitive closure and checks that each artifact's jar is actually
//! installed. Nothing is downloaded.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): POM model, coordinates and the pure resolution services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure and hosts
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sysdeps::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let parser = Arc::new(PomParser::with_fresh_cache(PomFileReader::new()));
//! let finder = DirectoryPomFinder::new(
//!     vec![PathBuf::from("/usr/share/maven-poms")],
//!     3,
//!     Arc::clone(&parser),
//! );
//! let verifier = JarArtifactVerifier::new(PathBuf::from("/usr/share/java"), 3);
//!
//! let use_case =
//!     ResolveDependenciesUseCase::new(parser, finder, verifier, StderrProgressReporter::new());
//! let request = ResolveRequest::new(
//!     vec![DeclaredDependency::new("org.slf4j", "slf4j-api")],
//!     vec![],
//! );
//! let response = use_case.execute(&request)?;
//!
//! let report = ResolutionReportBuilder::build(&response);
//! println!("{}", JsonFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::ManifestConsumer;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryPomFinder, FileSystemWriter, JarArtifactVerifier, PomFileReader, PomIndex,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::read_models::{ResolutionReport, ResolutionReportBuilder};
    pub use crate::application::services::{
        BomProcessor, BulkClassifier, PluginMatcher, PomParser, ResolutionCache,
        TransitiveResolver,
    };
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::ports::inbound::ResolutionConsumer;
    pub use crate::ports::outbound::{
        ArtifactVerifier, OutputPresenter, PomFinder, PomReader, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::resolution::domain::{
        ArtifactKey, DeclaredDependency, MavenCoordinate, Packaging, PomModel, Scope, SkipReason,
        Substitution, SubstitutionReason,
    };
    pub use crate::resolution::policies::{PropertyPrecedence, ScopePriority, VersionOrdering};
    pub use crate::shared::Result;
}

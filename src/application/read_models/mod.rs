//! Read models for CQRS-lite pattern
//!
//! View-optimized, serializable projections of a resolution response.

pub mod resolution_report;
pub mod resolution_report_builder;

pub use resolution_report::{
    ArtifactView, BomView, ManagedVersionView, PluginView, ReportMetadataView, ReportSummary,
    ResolutionReport, SkippedView, SubstitutionView,
};
pub use resolution_report_builder::ResolutionReportBuilder;

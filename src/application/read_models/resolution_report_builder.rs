//! Builder for constructing a ResolutionReport from a resolve response

use super::resolution_report::{
    ArtifactView, BomView, ManagedVersionView, PluginView, ReportMetadataView, ReportSummary,
    ResolutionReport, SkippedView, SubstitutionView,
};
use crate::application::dto::ResolveResponse;
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "sysdeps";

/// Transforms a [`ResolveResponse`] into the report read model.
pub struct ResolutionReportBuilder;

impl ResolutionReportBuilder {
    /// Builds a report stamped with the current time and a fresh run id.
    pub fn build(response: &ResolveResponse) -> ResolutionReport {
        Self::build_with_metadata(response, Self::generate_metadata())
    }

    pub fn build_with_metadata(
        response: &ResolveResponse,
        metadata: ReportMetadataView,
    ) -> ResolutionReport {
        let artifacts: Vec<ArtifactView> = response
            .resolved
            .iter()
            .map(|(key, coordinate)| ArtifactView {
                group_id: coordinate.group_id.clone(),
                artifact_id: coordinate.artifact_id.clone(),
                version: coordinate.version.clone(),
                scope: coordinate.scope.to_string(),
                packaging: coordinate.packaging.to_string(),
                transitive: response.true_transitive.contains(key),
                test_context: response.test_context.contains(key),
                pom_path: coordinate
                    .pom_path
                    .as_ref()
                    .map(|p| p.display().to_string()),
            })
            .collect();

        let summary = ReportSummary {
            resolved: artifacts.len(),
            transitive: response.true_transitive.len(),
            test_context: response.test_context.len(),
            boms: response.processed_boms.len(),
            skipped: response.skipped.len(),
            not_found: response.not_found.len(),
        };

        ResolutionReport {
            metadata,
            summary,
            artifacts,
            managed_versions: response
                .managed_versions
                .iter()
                .map(|(key, version)| ManagedVersionView {
                    identity: key.to_string(),
                    version: version.clone(),
                })
                .collect(),
            boms: response
                .bom_entries
                .iter()
                .map(|(bom, entries)| BomView {
                    bom: bom.clone(),
                    entries: entries.clone(),
                })
                .collect(),
            plugins: response
                .plugins
                .iter()
                .map(|plugin| PluginView {
                    plugin_id: plugin.plugin_id.clone(),
                    artifact: plugin.artifact.gav(),
                    implementation: plugin.implementation.iter().map(|c| c.gav()).collect(),
                })
                .collect(),
            substitutions: response
                .substitutions
                .iter()
                .map(|substitution| SubstitutionView {
                    identity: substitution.key.to_string(),
                    requested_version: substitution.requested_version.clone(),
                    target_version: substitution.target_version.clone(),
                    reason: substitution.reason.as_str().to_string(),
                    instruction: substitution.to_string(),
                })
                .collect(),
            skipped: response
                .skipped
                .iter()
                .map(|(key, reason)| SkippedView {
                    identity: key.to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
            not_found: response.not_found.iter().map(|key| key.to_string()).collect(),
        }
    }

    fn generate_metadata() -> ReportMetadataView {
        ReportMetadataView {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            run_id: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::domain::{
        ArtifactKey, MavenCoordinate, SkipReason, Substitution, SubstitutionReason,
    };

    fn test_metadata() -> ReportMetadataView {
        ReportMetadataView {
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: "0.0.0".to_string(),
            run_id: "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
        }
    }

    fn sample_response() -> ResolveResponse {
        let mut response = ResolveResponse::default();
        for (artifact, version) in [("root", "1"), ("dep", "2.0")] {
            let coordinate = MavenCoordinate::new("g", artifact, version);
            response.resolved.insert(coordinate.key(), coordinate);
        }
        response.true_transitive.insert(ArtifactKey::new("g", "dep"));
        response
            .skipped
            .insert(ArtifactKey::new("g", "junit"), SkipReason::Test);
        response.substitutions.push(Substitution {
            key: ArtifactKey::new("g", "root"),
            requested_version: "0.9".to_string(),
            target_version: "1".to_string(),
            reason: SubstitutionReason::SystemOverride,
        });
        response
    }

    #[test]
    fn test_build_projects_response() {
        let report = ResolutionReportBuilder::build_with_metadata(&sample_response(), test_metadata());

        assert_eq!(report.summary.resolved, 2);
        assert_eq!(report.summary.transitive, 1);
        assert_eq!(report.artifacts[0].gav(), "g:dep:2.0");
        assert!(report.artifacts[0].transitive);
        assert!(!report.artifacts[1].transitive);
        assert_eq!(report.skipped[0].reason, "Test");
        assert_eq!(report.substitutions[0].reason, "system-override");
        assert_eq!(
            report.substitutions[0].instruction,
            "Override version: g:root:0.9 -> 1"
        );
    }

    #[test]
    fn test_generated_metadata() {
        let report = ResolutionReportBuilder::build(&ResolveResponse::default());

        assert_eq!(report.metadata.tool_name, "sysdeps");
        assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));
        let uuid_part = report.metadata.run_id.strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
        assert!(report.metadata.timestamp.contains('T'));
    }
}

//! Resolution report read model
//!
//! The serialized shape of this struct is the JSON report format.

use serde::Serialize;

/// Main read model for one resolution run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummary,
    pub artifacts: Vec<ArtifactView>,
    pub managed_versions: Vec<ManagedVersionView>,
    pub boms: Vec<BomView>,
    pub plugins: Vec<PluginView>,
    pub substitutions: Vec<SubstitutionView>,
    pub skipped: Vec<SkippedView>,
    pub not_found: Vec<String>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` identifier of the run
    pub run_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub resolved: usize,
    pub transitive: usize,
    pub test_context: usize,
    pub boms: usize,
    pub skipped: usize,
    pub not_found: usize,
}

/// One resolved artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactView {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    pub packaging: String,
    pub transitive: bool,
    pub test_context: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom_path: Option<String>,
}

impl ArtifactView {
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedVersionView {
    pub identity: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomView {
    /// `groupId:artifactId:version` of the BOM
    pub bom: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginView {
    pub plugin_id: String,
    pub artifact: String,
    pub implementation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionView {
    pub identity: String,
    pub requested_version: String,
    pub target_version: String,
    pub reason: String,
    /// Human-readable instruction, e.g. `Override version: g:a:1 -> 2`
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedView {
    pub identity: String,
    pub reason: String,
}

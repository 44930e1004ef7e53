use crate::application::read_models::{
    ArtifactView, BomView, PluginView, ResolutionReport, SkippedView, SubstitutionView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const ARTIFACT_TABLE_HEADER: &str = "| Group | Artifact | Version | Scope | Packaging |\n";
const ARTIFACT_TABLE_SEPARATOR: &str = "|-------|----------|---------|-------|-----------|\n";

/// MarkdownFormatter adapter rendering the report as Markdown tables
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, report: &ResolutionReport) {
        output.push_str("# System Dependency Resolution\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {} (run `{}`)\n\n",
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.timestamp,
            report.metadata.run_id
        ));
        let summary = &report.summary;
        output.push_str(&format!(
            "- Resolved: {}\n- Transitive: {}\n- Test only: {}\n- BOMs: {}\n- Skipped: {}\n- Not found: {}\n\n",
            summary.resolved,
            summary.transitive,
            summary.test_context,
            summary.boms,
            summary.skipped,
            summary.not_found
        ));
    }

    fn render_artifact_table<'a>(
        &self,
        output: &mut String,
        title: &str,
        artifacts: impl Iterator<Item = &'a ArtifactView>,
    ) {
        let rows: Vec<&ArtifactView> = artifacts.collect();
        if rows.is_empty() {
            return;
        }
        output.push_str(&format!("## {}\n\n", title));
        output.push_str(ARTIFACT_TABLE_HEADER);
        output.push_str(ARTIFACT_TABLE_SEPARATOR);
        for artifact in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&artifact.group_id),
                Self::escape_markdown_table_cell(&artifact.artifact_id),
                Self::escape_markdown_table_cell(&artifact.version),
                artifact.scope,
                artifact.packaging
            ));
        }
        output.push('\n');
    }

    fn render_boms(&self, output: &mut String, boms: &[BomView]) {
        if boms.is_empty() {
            return;
        }
        output.push_str("## BOMs\n\n");
        for bom in boms {
            output.push_str(&format!("### {}\n\n", bom.bom));
            for entry in &bom.entries {
                output.push_str(&format!("- {}\n", entry));
            }
            output.push('\n');
        }
    }

    fn render_plugins(&self, output: &mut String, plugins: &[PluginView]) {
        if plugins.is_empty() {
            return;
        }
        output.push_str("## Plugins\n\n| Plugin | Artifact | Implementation |\n|--------|----------|----------------|\n");
        for plugin in plugins {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                plugin.plugin_id,
                plugin.artifact,
                plugin.implementation.join(", ")
            ));
        }
        output.push('\n');
    }

    fn render_substitutions(&self, output: &mut String, substitutions: &[SubstitutionView]) {
        if substitutions.is_empty() {
            return;
        }
        output.push_str("## Substitutions\n\n");
        for substitution in substitutions {
            output.push_str(&format!("- {}\n", substitution.instruction));
        }
        output.push('\n');
    }

    fn render_skipped(&self, output: &mut String, skipped: &[SkippedView], not_found: &[String]) {
        if !skipped.is_empty() {
            output.push_str("## Skipped\n\n| Dependency | Reason |\n|------------|--------|\n");
            for entry in skipped {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&entry.identity),
                    entry.reason
                ));
            }
            output.push('\n');
        }

        if !not_found.is_empty() {
            output.push_str("## Not Found\n\n");
            for identity in not_found {
                output.push_str(&format!("- {}\n", identity));
            }
            output.push('\n');
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_artifact_table(
            &mut output,
            "Declared Artifacts",
            report.artifacts.iter().filter(|a| !a.transitive && !a.test_context),
        );
        self.render_artifact_table(
            &mut output,
            "Transitive Artifacts",
            report.artifacts.iter().filter(|a| a.transitive && !a.test_context),
        );
        self.render_artifact_table(
            &mut output,
            "Test Artifacts",
            report.artifacts.iter().filter(|a| a.test_context),
        );
        self.render_boms(&mut output, &report.boms);
        self.render_plugins(&mut output, &report.plugins);
        self.render_substitutions(&mut output, &report.substitutions);
        self.render_skipped(&mut output, &report.skipped, &report.not_found);

        Ok(output)
    }
}

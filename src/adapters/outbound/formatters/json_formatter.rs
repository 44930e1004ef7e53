use crate::application::read_models::ResolutionReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the report as pretty-printed JSON
///
/// The document mirrors [`ResolutionReport`] field for field (camelCase keys).
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}

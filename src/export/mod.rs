//! Analytics report export.
//!
//! The report is a self-contained HTML document. The UI calls it a PDF; the
//! bytes are HTML and the file carries an `.html` extension.

mod html;

pub use html::{escape_html, format_russian_timestamp, render_report_html};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::ExportError;
use crate::state::analytics::AnalyticsSnapshot;
use crate::traits::DownloadSink;

/// `analytics-report-<YYYY-MM-DD>.html`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("analytics-report-{}.html", date.format("%Y-%m-%d"))
}

/// Renders the report and hands it to a [`DownloadSink`].
#[derive(Clone)]
pub struct ReportExporter {
    sink: Arc<dyn DownloadSink>,
}

impl std::fmt::Debug for ReportExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportExporter").finish_non_exhaustive()
    }
}

impl ReportExporter {
    pub fn new(sink: Arc<dyn DownloadSink>) -> Self {
        Self { sink }
    }

    /// Write the report for `data`, stamped with `generated_at`.
    ///
    /// Returns where the sink put the file.
    pub fn export<Tz: TimeZone>(
        &self,
        data: &AnalyticsSnapshot,
        generated_at: &DateTime<Tz>,
    ) -> Result<PathBuf, ExportError> {
        let file_name = report_file_name(generated_at.date_naive());
        let document = render_report_html(data, generated_at);
        tracing::debug!("Rendered report {} ({} bytes)", file_name, document.len());

        let path = self.sink.save(&file_name, document.as_bytes())?;
        tracing::info!("Report exported to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryDownloads;
    use crate::state::analytics::mock_snapshot;
    use chrono::Utc;

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "analytics-report-2026-03-07.html");
    }

    #[test]
    fn test_export_saves_through_sink() {
        let sink = InMemoryDownloads::new();
        let exporter = ReportExporter::new(Arc::new(sink.clone()));
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();

        let path = exporter.export(&mock_snapshot(), &at).unwrap();
        assert_eq!(path, PathBuf::from("memory/analytics-report-2026-10-16.html"));
        let files = sink.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "analytics-report-2026-10-16.html");
    }

    #[test]
    fn test_export_propagates_sink_failure() {
        let sink = InMemoryDownloads::new();
        sink.fail_with("нет места");
        let exporter = ReportExporter::new(Arc::new(sink.clone()));
        let err = exporter.export(&mock_snapshot(), &Utc::now()).unwrap_err();
        assert!(matches!(err, ExportError::Rejected(ref m) if m == "нет места"));
        assert!(sink.files().is_empty());
    }
}

//! SubmitDailyReport - Command handler for the daily symptom report.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::tracking::{DailyReport, Symptom};
use crate::ports::DailyReportRepository;

#[derive(Debug, Clone)]
pub struct SubmitDailyReportCommand {
    pub report_date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub diary_text: Option<String>,
    pub mood_level: Option<u8>,
    pub craving_level: Option<u8>,
}

pub struct SubmitDailyReportHandler {
    reports: Arc<dyn DailyReportRepository>,
}

impl SubmitDailyReportHandler {
    pub fn new(reports: Arc<dyn DailyReportRepository>) -> Self {
        Self { reports }
    }

    /// A second report for the same day replaces the first one's content.
    pub async fn handle(
        &self,
        cmd: SubmitDailyReportCommand,
        metadata: CommandMetadata,
    ) -> Result<DailyReport, DomainError> {
        let report = DailyReport::new(
            metadata.user_id.clone(),
            cmd.report_date,
            cmd.symptoms,
            cmd.diary_text,
            cmd.mood_level,
            cmd.craving_level,
            Timestamp::now(),
        )?;

        let stored = self.reports.upsert(&report).await?;
        tracing::info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            date = %stored.report_date,
            symptoms = stored.symptoms.len(),
            "daily report saved"
        );
        Ok(stored)
    }
}

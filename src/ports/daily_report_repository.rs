//! DailyReportRepository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::tracking::DailyReport;

#[async_trait]
pub trait DailyReportRepository: Send + Sync {
    /// Insert the report, or overwrite the content of the existing report
    /// for the same user and date. Returns the stored report.
    async fn upsert(&self, report: &DailyReport) -> Result<DailyReport, DomainError>;

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyReport>, DomainError>;
}

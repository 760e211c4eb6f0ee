//! In-memory stats and daily reports.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::tracking::{DailyReport, UserStats};
use crate::ports::{DailyReportRepository, StatsRepository};

#[derive(Debug, Default)]
pub struct InMemoryStatsRepository {
    stats: RwLock<HashMap<UserId, UserStats>>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserStats>, DomainError> {
        Ok(self.stats.read().await.get(user_id).cloned())
    }

    async fn save(&self, stats: &UserStats) -> Result<(), DomainError> {
        self.stats
            .write()
            .await
            .insert(stats.user_id.clone(), stats.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryDailyReportRepository {
    reports: RwLock<HashMap<(UserId, NaiveDate), DailyReport>>,
}

impl InMemoryDailyReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DailyReportRepository for InMemoryDailyReportRepository {
    async fn upsert(&self, report: &DailyReport) -> Result<DailyReport, DomainError> {
        let mut reports = self.reports.write().await;
        let key = (report.user_id.clone(), report.report_date);
        let stored = match reports.get_mut(&key) {
            Some(existing) => {
                existing.replace_content(report.clone());
                existing.clone()
            }
            None => {
                reports.insert(key, report.clone());
                report.clone()
            }
        };
        Ok(stored)
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyReport>, DomainError> {
        Ok(self
            .reports
            .read()
            .await
            .get(&(user_id.clone(), date))
            .cloned())
    }
}

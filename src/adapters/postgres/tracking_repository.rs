//! PostgreSQL implementations of StatsRepository and DailyReportRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DailyReportId, DomainError, Timestamp, UserId};
use crate::domain::tracking::{DailyReport, UserStats};
use crate::ports::{DailyReportRepository, StatsRepository};

use super::rows;

#[derive(Clone)]
pub struct PostgresStatsRepository {
    pool: PgPool,
}

impl PostgresStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PostgresStatsRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserStats>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, quit_date, days_smoke_free, money_saved_cents, cigarettes_not_smoked,
                   lessons_attended, circles_attended, activities_completed, created_at, updated_at
            FROM user_stats
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch stats", e))?;

        row.as_ref().map(row_to_stats).transpose()
    }

    async fn save(&self, stats: &UserStats) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_stats (
                user_id, quit_date, days_smoke_free, money_saved_cents, cigarettes_not_smoked,
                lessons_attended, circles_attended, activities_completed, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                quit_date = EXCLUDED.quit_date,
                days_smoke_free = EXCLUDED.days_smoke_free,
                money_saved_cents = EXCLUDED.money_saved_cents,
                cigarettes_not_smoked = EXCLUDED.cigarettes_not_smoked,
                lessons_attended = EXCLUDED.lessons_attended,
                circles_attended = EXCLUDED.circles_attended,
                activities_completed = EXCLUDED.activities_completed,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(stats.user_id.as_str())
        .bind(stats.quit_date)
        .bind(i64::from(stats.days_smoke_free))
        .bind(stats.money_saved_cents)
        .bind(i64::try_from(stats.cigarettes_not_smoked).unwrap_or(i64::MAX))
        .bind(i64::from(stats.lessons_attended))
        .bind(i64::from(stats.circles_attended))
        .bind(i64::from(stats.activities_completed))
        .bind(stats.created_at.as_datetime())
        .bind(stats.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save stats", e))?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresDailyReportRepository {
    pool: PgPool,
}

impl PostgresDailyReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DailyReportRepository for PostgresDailyReportRepository {
    async fn upsert(&self, report: &DailyReport) -> Result<DailyReport, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO daily_reports (
                id, user_id, report_date, symptoms, diary_text, mood_level, craving_level, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, report_date) DO UPDATE SET
                symptoms = EXCLUDED.symptoms,
                diary_text = EXCLUDED.diary_text,
                mood_level = EXCLUDED.mood_level,
                craving_level = EXCLUDED.craving_level
            RETURNING id, user_id, report_date, symptoms, diary_text, mood_level, craving_level, created_at
            "#,
        )
        .bind(report.id.as_uuid())
        .bind(report.user_id.as_str())
        .bind(report.report_date)
        .bind(rows::to_json(&report.symptoms, "symptoms")?)
        .bind(&report.diary_text)
        .bind(report.mood_level.map(i16::from))
        .bind(report.craving_level.map(i16::from))
        .bind(report.created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save daily report", e))?;

        row_to_report(&row)
    }

    async fn find_by_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyReport>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, report_date, symptoms, diary_text, mood_level, craving_level, created_at
            FROM daily_reports
            WHERE user_id = $1 AND report_date = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch daily report", e))?;

        row.as_ref().map(row_to_report).transpose()
    }
}

fn row_to_stats(row: &PgRow) -> Result<UserStats, DomainError> {
    Ok(UserStats {
        user_id: rows::user_id(row)?,
        quit_date: rows::get(row, "quit_date")?,
        days_smoke_free: counter(row, "days_smoke_free")?,
        money_saved_cents: rows::get(row, "money_saved_cents")?,
        cigarettes_not_smoked: counter(row, "cigarettes_not_smoked")?,
        lessons_attended: counter(row, "lessons_attended")?,
        circles_attended: counter(row, "circles_attended")?,
        activities_completed: counter(row, "activities_completed")?,
        created_at: Timestamp::from_datetime(rows::get(row, "created_at")?),
        updated_at: Timestamp::from_datetime(rows::get(row, "updated_at")?),
    })
}

fn counter<T: TryFrom<i64>>(row: &PgRow, column: &str) -> Result<T, DomainError> {
    let raw: i64 = rows::get(row, column)?;
    rows::counter(raw, column)
}

fn level(row: &PgRow, column: &str) -> Result<Option<u8>, DomainError> {
    let raw: Option<i16> = rows::get(row, column)?;
    raw.map(|v| rows::counter(i64::from(v), column)).transpose()
}

fn row_to_report(row: &PgRow) -> Result<DailyReport, DomainError> {
    let id: uuid::Uuid = rows::get(row, "id")?;
    Ok(DailyReport {
        id: DailyReportId::from_uuid(id),
        user_id: rows::user_id(row)?,
        report_date: rows::get(row, "report_date")?,
        symptoms: rows::from_json(row, "symptoms")?,
        diary_text: rows::get(row, "diary_text")?,
        mood_level: level(row, "mood_level")?,
        craving_level: level(row, "craving_level")?,
        created_at: Timestamp::from_datetime(rows::get(row, "created_at")?),
    })
}

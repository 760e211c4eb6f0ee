//! PostgreSQL implementation of ProgramRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::program::{ProgramEnrollment, ProgramWeek, UserProgress, WeekNumber};
use crate::ports::ProgramRepository;

use super::rows;

#[derive(Clone)]
pub struct PostgresProgramRepository {
    pool: PgPool,
}

impl PostgresProgramRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Writes the program content, replacing any existing text per week.
    pub async fn seed_weeks(&self, weeks: &[ProgramWeek]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        for week in weeks {
            sqlx::query(
                r#"
                INSERT INTO program_weeks (
                    week_number, title, theme, lesson, circle, activity,
                    checkin, task_title, task_description, tips
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (week_number) DO UPDATE SET
                    title = EXCLUDED.title,
                    theme = EXCLUDED.theme,
                    lesson = EXCLUDED.lesson,
                    circle = EXCLUDED.circle,
                    activity = EXCLUDED.activity,
                    checkin = EXCLUDED.checkin,
                    task_title = EXCLUDED.task_title,
                    task_description = EXCLUDED.task_description,
                    tips = EXCLUDED.tips
                "#,
            )
            .bind(i16::from(week.week_number.value()))
            .bind(&week.title)
            .bind(&week.theme)
            .bind(&week.lesson)
            .bind(&week.circle)
            .bind(&week.activity)
            .bind(&week.checkin)
            .bind(&week.task_title)
            .bind(&week.task_description)
            .bind(&week.tips)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to seed program week", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit program weeks", e))
    }
}

#[async_trait]
impl ProgramRepository for PostgresProgramRepository {
    async fn list_weeks(&self) -> Result<Vec<ProgramWeek>, DomainError> {
        let found = sqlx::query(
            r#"
            SELECT week_number, title, theme, lesson, circle, activity,
                   checkin, task_title, task_description, tips
            FROM program_weeks
            ORDER BY week_number
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch program weeks", e))?;

        found.iter().map(row_to_week).collect()
    }

    async fn find_enrollment(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ProgramEnrollment>, DomainError> {
        let found = sqlx::query(
            r#"
            SELECT week_number, completed, completed_at, current_week
            FROM user_progress
            WHERE user_id = $1
            ORDER BY week_number
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch progress", e))?;

        if found.is_empty() {
            return Ok(None);
        }

        let progress = found
            .iter()
            .map(row_to_progress)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(ProgramEnrollment::from_rows(user_id.clone(), progress)))
    }

    async fn save_enrollment(&self, enrollment: &ProgramEnrollment) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        for row in enrollment.rows() {
            sqlx::query(
                r#"
                INSERT INTO user_progress (user_id, week_number, completed, completed_at, current_week)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (user_id, week_number) DO UPDATE SET
                    completed = EXCLUDED.completed,
                    completed_at = EXCLUDED.completed_at,
                    current_week = EXCLUDED.current_week
                "#,
            )
            .bind(enrollment.user_id().as_str())
            .bind(i16::from(row.week_number.value()))
            .bind(row.completed)
            .bind(row.completed_at.map(|t| *t.as_datetime()))
            .bind(row.current_week)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to save progress", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit progress", e))
    }
}

fn week_number(row: &PgRow) -> Result<WeekNumber, DomainError> {
    let raw: i16 = rows::get(row, "week_number")?;
    let value: u8 = rows::counter(i64::from(raw), "week_number")?;
    WeekNumber::new(value).map_err(|e| DomainError::database("Invalid week_number", e))
}

fn row_to_week(row: &PgRow) -> Result<ProgramWeek, DomainError> {
    Ok(ProgramWeek {
        week_number: week_number(row)?,
        title: rows::get(row, "title")?,
        theme: rows::get(row, "theme")?,
        lesson: rows::get(row, "lesson")?,
        circle: rows::get(row, "circle")?,
        activity: rows::get(row, "activity")?,
        checkin: rows::get(row, "checkin")?,
        task_title: rows::get(row, "task_title")?,
        task_description: rows::get(row, "task_description")?,
        tips: rows::get(row, "tips")?,
    })
}

fn row_to_progress(row: &PgRow) -> Result<UserProgress, DomainError> {
    let completed_at: Option<chrono::DateTime<chrono::Utc>> = rows::get(row, "completed_at")?;
    Ok(UserProgress {
        week_number: week_number(row)?,
        completed: rows::get(row, "completed")?,
        completed_at: completed_at.map(Timestamp::from_datetime),
        current_week: rows::get(row, "current_week")?,
    })
}

//! PostgreSQL implementations of ProfileRepository and IntakeRepository.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::intake::ClinicalIntake;
use crate::domain::participant::UserProfile;
use crate::ports::{IntakeRepository, ProfileRepository};

use super::rows;

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn upsert(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let identification = rows::to_json(&profile.identification, "identification")?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, full_name, identification, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                identification = EXCLUDED.identification,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.user_id.as_str())
        .bind(&profile.identification.full_name)
        .bind(identification)
        .bind(profile.created_at.as_datetime())
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert profile", e))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, identification, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch profile", e))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn full_names(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, String>, DomainError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<String> = user_ids.iter().map(|id| id.as_str().to_string()).collect();

        let found = sqlx::query("SELECT user_id, full_name FROM user_profiles WHERE user_id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch profile names", e))?;

        let mut names = HashMap::with_capacity(found.len());
        for row in &found {
            names.insert(rows::user_id(row)?, rows::get::<String>(row, "full_name")?);
        }
        Ok(names)
    }
}

#[derive(Clone)]
pub struct PostgresIntakeRepository {
    pool: PgPool,
}

impl PostgresIntakeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SECTION_TABLES: [&str; 3] = ["anamnese_tabagismo", "anamnese_saude", "anamnese_motivacao"];

#[async_trait]
impl IntakeRepository for PostgresIntakeRepository {
    async fn save(&self, user_id: &UserId, intake: &ClinicalIntake) -> Result<(), DomainError> {
        let sections = [
            rows::to_json(&intake.smoking, "smoking")?,
            rows::to_json(&intake.health, "health")?,
            rows::to_json(&intake.motivation, "motivation")?,
        ];

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        for (table, data) in SECTION_TABLES.iter().zip(sections) {
            sqlx::query(&format!(
                "INSERT INTO {} (user_id, data, updated_at) VALUES ($1, $2, now()) \
                 ON CONFLICT (user_id) DO UPDATE SET data = EXCLUDED.data, updated_at = now()",
                table
            ))
            .bind(user_id.as_str())
            .bind(data)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to save intake section", e))?;
        }

        sqlx::query(
            r#"
            INSERT INTO anamnese_fagerstrom (user_id, data, total_score, updated_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (user_id) DO UPDATE SET
                data = EXCLUDED.data,
                total_score = EXCLUDED.total_score,
                updated_at = now()
            "#,
        )
        .bind(user_id.as_str())
        .bind(rows::to_json(&intake.fagerstrom, "fagerstrom")?)
        .bind(i16::from(intake.fagerstrom.score.points()))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to save Fagerström answers", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit intake", e))
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<ClinicalIntake>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.data AS smoking, s.data AS health, m.data AS motivation, f.data AS fagerstrom
            FROM anamnese_fagerstrom f
            JOIN anamnese_tabagismo t ON t.user_id = f.user_id
            JOIN anamnese_saude s ON s.user_id = f.user_id
            JOIN anamnese_motivacao m ON m.user_id = f.user_id
            WHERE f.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch intake", e))?;

        row.as_ref().map(row_to_intake).transpose()
    }
}

fn row_to_profile(row: &PgRow) -> Result<UserProfile, DomainError> {
    Ok(UserProfile {
        user_id: rows::user_id(row)?,
        identification: rows::from_json(row, "identification")?,
        created_at: Timestamp::from_datetime(rows::get(row, "created_at")?),
        updated_at: Timestamp::from_datetime(rows::get(row, "updated_at")?),
    })
}

fn row_to_intake(row: &PgRow) -> Result<ClinicalIntake, DomainError> {
    Ok(ClinicalIntake {
        smoking: rows::from_json(row, "smoking")?,
        health: rows::from_json(row, "health")?,
        motivation: rows::from_json(row, "motivation")?,
        fagerstrom: rows::from_json(row, "fagerstrom")?,
    })
}

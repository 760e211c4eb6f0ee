//! PostgreSQL implementation of ChatRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::community::ChatMessage;
use crate::domain::foundation::{ChatMessageId, DomainError, Timestamp};
use crate::ports::ChatRepository;

use super::rows;

#[derive(Clone)]
pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO chat_messages (id, user_id, message, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(message.id.as_uuid())
        .bind(message.user_id.as_str())
        .bind(&message.body)
        .bind(message.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert chat message", e))?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ChatMessage>, DomainError> {
        let found = sqlx::query(
            r#"
            SELECT id, user_id, message, created_at FROM (
                SELECT id, user_id, message, created_at
                FROM chat_messages
                ORDER BY created_at DESC
                LIMIT $1
            ) latest
            ORDER BY created_at ASC
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch chat messages", e))?;

        found.iter().map(row_to_message).collect()
    }
}

fn row_to_message(row: &PgRow) -> Result<ChatMessage, DomainError> {
    let id: uuid::Uuid = rows::get(row, "id")?;
    Ok(ChatMessage {
        id: ChatMessageId::from_uuid(id),
        user_id: rows::user_id(row)?,
        body: rows::get(row, "message")?,
        created_at: Timestamp::from_datetime(rows::get(row, "created_at")?),
    })
}

// ABOUTME: Database operations for assistant chat history
// ABOUTME: Appends single messages or whole turns atomically, lists and clears per-user history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_db_timestamp, parse_db_uuid, to_db_timestamp};
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use pulse_core::models::{MessageRecord, MessageRole};
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Chat history database operations
pub struct ChatManager {
    pool: SqlitePool,
}

impl ChatManager {
    /// Create a new chat manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a message to the user's conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn append_message(
        &self,
        user_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> AppResult<MessageRecord> {
        let record = new_record(user_id, role, content);
        insert_message(&self.pool, &record).await?;

        debug!(db.table = "chat_messages", user.id = %user_id, role = role.as_str(), "Message stored");
        Ok(record)
    }

    /// Store a user message and the assistant reply to it as one unit
    ///
    /// Either both messages are stored or neither is. The reply is never
    /// timestamped before the message it answers.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert or the commit fails
    pub async fn append_turn(
        &self,
        user_id: Uuid,
        message: &str,
        reply: &str,
    ) -> AppResult<(MessageRecord, MessageRecord)> {
        let message = new_record(user_id, MessageRole::User, message);
        let mut reply = new_record(user_id, MessageRole::Assistant, reply);
        reply.created_at = reply.created_at.max(message.created_at);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;
        insert_message(&mut *tx, &message).await?;
        insert_message(&mut *tx, &reply).await?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit chat turn: {e}")))?;

        debug!(db.table = "chat_messages", user.id = %user_id, "Chat turn stored");
        Ok((message, reply))
    }

    /// The most recent `limit` messages, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn history(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<MessageRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, role, content, created_at
            FROM chat_messages
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get messages: {e}")))?;

        let mut messages = rows
            .iter()
            .map(row_to_message)
            .collect::<AppResult<Vec<_>>>()?;
        messages.reverse();
        Ok(messages)
    }

    /// Delete the user's whole conversation, returning the number of removed messages
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn clear_history(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM chat_messages WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear messages: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn new_record(user_id: Uuid, role: MessageRole, content: &str) -> MessageRecord {
    MessageRecord {
        id: Uuid::new_v4(),
        user_id,
        role,
        content: content.to_owned(),
        created_at: Utc::now(),
    }
}

async fn insert_message<'e, E>(executor: E, record: &MessageRecord) -> AppResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r"
        INSERT INTO chat_messages (id, user_id, role, content, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(record.id.to_string())
    .bind(record.user_id.to_string())
    .bind(record.role.as_str())
    .bind(&record.content)
    .bind(to_db_timestamp(record.created_at))
    .execute(executor)
    .await
    .map_err(|e| AppError::database(format!("Failed to add message: {e}")))?;
    Ok(())
}

fn row_to_message(row: &SqliteRow) -> AppResult<MessageRecord> {
    let role: String = row.get("role");
    let role = MessageRole::parse(&role)
        .ok_or_else(|| AppError::database(format!("Unknown stored message role '{role}'")))?;
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let created_at: String = row.get("created_at");

    Ok(MessageRecord {
        id: parse_db_uuid(&id)?,
        user_id: parse_db_uuid(&user_id)?,
        role,
        content: row.get("content"),
        created_at: parse_db_timestamp(&created_at)?,
    })
}

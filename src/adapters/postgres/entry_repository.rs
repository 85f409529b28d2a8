//! PostgreSQL implementation of EntryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::row::get;
use crate::domain::changes::{Entry, EntryInput};
use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::ports::{EntryPage, EntryRepository, PageRequest};

const ENTRY_COLUMNS: &str = "id, title, description, video, author, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn create(&self, author: &UserId, input: &EntryInput) -> Result<Entry, DomainError> {
        let now = Timestamp::now();
        let sql = format!(
            r#"
            INSERT INTO entries (title, description, video, author, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {}
            "#,
            ENTRY_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.video.as_deref())
            .bind(author.as_str())
            .bind(now.as_datetime())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert entry", e))?;

        row_to_entry(&row)
    }

    async fn update(&self, entry: &Entry) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE entries SET
                title = $2,
                description = $3,
                video = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(entry.id.as_i64())
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(entry.video.as_deref())
        .bind(entry.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Entry not found: {}", entry.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, DomainError> {
        let sql = format!("SELECT {} FROM entries WHERE id = $1", ENTRY_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch entry", e))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn delete(&self, id: EntryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Entry not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<EntryPage, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count entries", e))?;

        let sql = format!(
            "SELECT {} FROM entries ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            ENTRY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(page.per_page))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list entries", e))?;

        let items = rows.iter().map(row_to_entry).collect::<Result<Vec<_>, _>>()?;

        Ok(EntryPage {
            items,
            total: total.max(0) as u64,
            page: page.page,
            per_page: page.per_page,
        })
    }
}

fn row_to_entry(row: &PgRow) -> Result<Entry, DomainError> {
    let author: String = get(row, "author")?;
    let author = UserId::new(author).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid author: {}", e))
    })?;
    let created_at: DateTime<Utc> = get(row, "created_at")?;
    let updated_at: DateTime<Utc> = get(row, "updated_at")?;

    Ok(Entry {
        id: EntryId::new(get(row, "id")?),
        title: get(row, "title")?,
        description: get(row, "description")?,
        video: get(row, "video")?,
        author,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

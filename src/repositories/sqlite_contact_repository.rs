use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

/// Row type from database query: (id, name, email, phone)
type ContactRow = (i64, String, String, String);

/// Contact repository backed by the `contacts` table.
///
/// Each call checks a connection out of the shared pool for the duration of
/// one statement; the pool returns it on every exit path.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Create a new SqliteContactRepository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(&self, limit: u32, offset: u64) -> ContactResult<Vec<Contact>> {
        // SQLite integers are signed; offsets past i64::MAX select nothing anyway.
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone
            FROM contacts
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!(limit, offset, returned = rows.len(), "Listed contacts");

        Ok(rows
            .into_iter()
            .map(|(id, name, email, phone)| Contact {
                id,
                name,
                email,
                phone,
            })
            .collect())
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<Contact> {
        let result = sqlx::query(
            r#"
            INSERT INTO contacts (name, email, phone)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&contact.name)
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted contact");

        Ok(Contact::from_new(id, contact.clone()))
    }

    async fn delete(&self, id: ContactId) -> ContactResult<u64> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

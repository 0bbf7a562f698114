use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// User record in the database. Created on signup, never updated or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 digest, never plaintext
}

#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("email address already exists")]
    EmailTaken,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl User {
    /// Find a user by email, the login key.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. The unique index on email is the source of truth
    /// for uniqueness; a duplicate comes back as [`CreateUserError::EmailTaken`].
    pub async fn create(
        db: &SqlitePool,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, CreateUserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES (?, ?, ?, ?)
            RETURNING id, first_name, last_name, email, password_hash
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                CreateUserError::EmailTaken
            }
            _ => CreateUserError::Database(e),
        })?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MIGRATOR;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_db() -> SqlitePool {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database");
        MIGRATOR.run(&db).await.expect("migrations");
        db
    }

    #[tokio::test]
    async fn create_assigns_id_and_find_by_email_roundtrips() {
        let db = test_db().await;

        let created = User::create(&db, "Ann", "Lee", "ann@x.com", "digest")
            .await
            .expect("create should succeed");
        assert!(created.id > 0);

        let found = User::find_by_email(&db, "ann@x.com")
            .await
            .expect("query should succeed")
            .expect("user should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.first_name, "Ann");
        assert_eq!(found.last_name, "Lee");
        assert_eq!(found.password_hash, "digest");
    }

    #[tokio::test]
    async fn find_by_email_returns_none_for_unknown() {
        let db = test_db().await;
        let found = User::find_by_email(&db, "nobody@x.com")
            .await
            .expect("query should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_unique_index() {
        let db = test_db().await;

        User::create(&db, "Ann", "Lee", "ann@x.com", "digest")
            .await
            .expect("first create should succeed");
        let err = User::create(&db, "Another", "Ann", "ann@x.com", "digest2")
            .await
            .expect_err("second create should fail");
        assert!(matches!(err, CreateUserError::EmailTaken));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("ann@x.com")
            .fetch_one(&db)
            .await
            .expect("count should succeed");
        assert_eq!(count, 1);
    }
}

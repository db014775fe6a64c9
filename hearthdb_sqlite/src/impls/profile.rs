use async_trait::async_trait;
use hearthcore::{
    error::BackendError,
    profile::{
        UserProfile,
        traits::ProfileBackend,
    },
};
use sqlx::Row;

use crate::SqliteBackend;

async fn set_profile_sqlite(
    backend: &SqliteBackend,
    user_id: &str,
    avatar: Option<&str>,
) -> Result<(), BackendError> {
    sqlx::query(r#"
INSERT INTO user_profile (
    user_id,
    avatar
)
VALUES ( ?1, ?2 )
ON CONFLICT(user_id) DO UPDATE SET
    avatar = ?2
        "#)
        .bind(user_id)
        .bind(avatar)
        .execute(&*backend.pool)
        .await?;
    Ok(())
}

async fn get_profile_sqlite(
    backend: &SqliteBackend,
    user_id: &str,
) -> Result<Option<UserProfile>, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    user_id,
    avatar
FROM
    user_profile
WHERE
    user_id = ?1
        "#)
        .bind(user_id)
        .try_map(|row: sqlx::sqlite::SqliteRow| Ok(UserProfile {
            user_id: row.try_get("user_id")?,
            avatar: row.try_get("avatar")?,
        }))
        .fetch_optional(&*backend.pool)
        .await?;
    Ok(rec)
}

#[async_trait]
impl ProfileBackend for SqliteBackend {
    async fn set_profile(
        &self,
        user_id: &str,
        avatar: Option<&str>,
    ) -> Result<(), BackendError> {
        set_profile_sqlite(self, user_id, avatar).await
    }

    async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfile>, BackendError> {
        get_profile_sqlite(self, user_id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::profile::{
        UserProfile,
        traits::ProfileBackend,
    };
    use crate::SqliteBackend;

    #[tokio::test]
    async fn test_set_get_replace() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let pb: &dyn ProfileBackend = &backend;
        assert_eq!(pb.get_profile("alice").await?, None);

        pb.set_profile("alice", None).await?;
        assert_eq!(pb.get_profile("alice").await?, Some(UserProfile {
            user_id: "alice".into(),
            avatar: None,
        }));

        pb.set_profile("alice", Some("uploads/alice.png")).await?;
        assert_eq!(
            pb.get_profile("alice").await?
                .expect("profile just set")
                .avatar
                .as_deref(),
            Some("uploads/alice.png"),
        );
        Ok(())
    }
}

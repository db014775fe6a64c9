use async_trait::async_trait;
use hearthcore::{
    ac::{
        group::{Group, Groups},
        traits::GroupBackend,
    },
    error::BackendError,
    rid::Rid,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn group_from_row(row: SqliteRow) -> Result<Group, sqlx::Error> {
    Ok(Group {
        id: row.try_get::<String, _>("id")?.into(),
        name: row.try_get("name")?,
        created_ts: row.try_get("created_ts")?,
    })
}

async fn add_group_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO ugroup (
    id,
    name,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#)
        .bind(id.as_str())
        .bind(name)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_group_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<Group, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    ugroup
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(group_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn add_group_member_sqlite(
    backend: &SqliteBackend,
    group_id: &Rid,
    user_id: &str,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO ugroup_member (
    group_id,
    user_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(group_id.as_str())
        .bind(user_id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn remove_group_member_sqlite(
    backend: &SqliteBackend,
    group_id: &Rid,
    user_id: &str,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
DELETE FROM
    ugroup_member
WHERE
    group_id = ?1 AND
    user_id = ?2
        "#)
        .bind(group_id.as_str())
        .bind(user_id)
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn list_groups_for_user_sqlite(
    backend: &SqliteBackend,
    user_id: &str,
) -> Result<Groups, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    ugroup.id,
    ugroup.name,
    ugroup.created_ts
FROM
    ugroup
JOIN ugroup_member ON ugroup_member.group_id = ugroup.id
WHERE
    ugroup_member.user_id = ?1
ORDER BY
    ugroup.name
        "#)
        .bind(user_id)
        .try_map(group_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

#[async_trait]
impl GroupBackend for SqliteBackend {
    async fn add_group(
        &self,
        name: &str,
    ) -> Result<Rid, BackendError> {
        add_group_sqlite(self, name).await
    }

    async fn get_group_by_id(
        &self,
        id: &Rid,
    ) -> Result<Group, BackendError> {
        get_group_by_id_sqlite(self, id).await
    }

    async fn add_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, BackendError> {
        add_group_member_sqlite(self, group_id, user_id).await
    }

    async fn remove_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, BackendError> {
        remove_group_member_sqlite(self, group_id, user_id).await
    }

    async fn list_groups_for_user(
        &self,
        user_id: &str,
    ) -> Result<Groups, BackendError> {
        list_groups_for_user_sqlite(self, user_id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::ac::traits::GroupBackend;
    use crate::SqliteBackend;

    #[tokio::test]
    async fn test_basic() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let gb: &dyn GroupBackend = &backend;
        let id = gb.add_group("household").await?;
        let group = gb.get_group_by_id(&id).await?;
        assert_eq!(group.name, "household");
        assert_eq!(group.created_ts, 1234567890);
        Ok(())
    }

    #[tokio::test]
    async fn test_membership() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let gb: &dyn GroupBackend = &backend;
        let household = gb.add_group("household").await?;
        let neighbours = gb.add_group("neighbours").await?;

        assert!(gb.add_group_member(&household, "alice").await?);
        // duplicate membership is a no-op
        assert!(!gb.add_group_member(&household, "alice").await?);
        assert!(gb.add_group_member(&neighbours, "alice").await?);
        assert!(gb.add_group_member(&household, "bob").await?);

        let groups = gb.list_groups_for_user("alice").await?;
        assert_eq!(groups.len(), 2);
        assert_eq!(gb.list_groups_for_user("bob").await?.len(), 1);
        assert_eq!(gb.list_groups_for_user("nobody").await?.len(), 0);

        assert!(gb.remove_group_member(&neighbours, "alice").await?);
        assert!(!gb.remove_group_member(&neighbours, "alice").await?);
        assert_eq!(gb.list_groups_for_user("alice").await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_member_of_missing_group() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let gb: &dyn GroupBackend = &backend;
        let err = gb.add_group_member(&"no-such-group".into(), "alice")
            .await
            .expect_err("membership requires an existing group");
        assert!(err.is_constraint_violation());
        Ok(())
    }
}

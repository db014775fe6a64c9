use async_trait::async_trait;
use hearthcore::{
    category::{
        Categories,
        Category,
        traits::CategoryBackend,
    },
    error::BackendError,
    rid::Rid,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn category_from_row(row: SqliteRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get::<String, _>("id")?.into(),
        name: row.try_get("name")?,
        created_ts: row.try_get("created_ts")?,
    })
}

async fn add_category_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO category (
    id,
    name,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
ON CONFLICT(name) DO NOTHING
        "#)
        .bind(id.as_str())
        .bind(name)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    // names are unique, so on conflict hand back the id already held
    let rec: String = sqlx::query(r#"
SELECT
    id
FROM
    category
WHERE
    name = ?1
        "#)
        .bind(name)
        .try_map(|row: SqliteRow| row.try_get("id"))
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec.into())
}

async fn list_categories_sqlite(
    backend: &SqliteBackend,
) -> Result<Categories, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name,
    created_ts
FROM
    category
ORDER BY
    name
        "#)
        .try_map(category_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn tag_item_sqlite(
    backend: &SqliteBackend,
    item_id: &Rid,
    category_id: &Rid,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO item_category (
    item_id,
    category_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(item_id.as_str())
        .bind(category_id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn list_categories_for_item_sqlite(
    backend: &SqliteBackend,
    item_id: &Rid,
) -> Result<Categories, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    category.id,
    category.name,
    category.created_ts
FROM
    category
JOIN item_category ON item_category.category_id = category.id
WHERE
    item_category.item_id = ?1
ORDER BY
    category.name
        "#)
        .bind(item_id.as_str())
        .try_map(category_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

#[async_trait]
impl CategoryBackend for SqliteBackend {
    async fn add_category(
        &self,
        name: &str,
    ) -> Result<Rid, BackendError> {
        add_category_sqlite(self, name).await
    }

    async fn list_categories(
        &self,
    ) -> Result<Categories, BackendError> {
        list_categories_sqlite(self).await
    }

    async fn tag_item(
        &self,
        item_id: &Rid,
        category_id: &Rid,
    ) -> Result<bool, BackendError> {
        tag_item_sqlite(self, item_id, category_id).await
    }

    async fn list_categories_for_item(
        &self,
        item_id: &Rid,
    ) -> Result<Categories, BackendError> {
        list_categories_for_item_sqlite(self, item_id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::category::traits::CategoryBackend;
    use test_hearth::inventory::{
        make_location_with_room,
        make_named_item,
    };
    use crate::SqliteBackend;

    #[tokio::test]
    async fn test_add_idempotent() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let cb: &dyn CategoryBackend = &backend;
        let appliances = cb.add_category("appliances").await?;
        assert_eq!(cb.add_category("appliances").await?, appliances);
        cb.add_category("tools").await?;
        assert_eq!(cb.list_categories().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_tagging() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, room_id) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let item_id = make_named_item(
            &backend,
            "alice",
            &location_id,
            Some(&room_id),
            "Dishwasher",
        ).await?;
        let cb: &dyn CategoryBackend = &backend;
        let appliances = cb.add_category("appliances").await?;
        let white_goods = cb.add_category("white goods").await?;

        assert!(cb.tag_item(&item_id, &appliances).await?);
        // tagging the same pair again is a no-op
        assert!(!cb.tag_item(&item_id, &appliances).await?);
        assert!(cb.tag_item(&item_id, &white_goods).await?);

        let categories = cb.list_categories_for_item(&item_id).await?;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "appliances");
        Ok(())
    }
}

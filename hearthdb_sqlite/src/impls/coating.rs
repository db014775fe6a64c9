use async_trait::async_trait;
use hearthcore::{
    coating::{
        Coating,
        CoatingFields,
        Coatings,
        traits::CoatingBackend,
    },
    error::BackendError,
    rid::Rid,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn coating_from_row(row: SqliteRow) -> Result<Coating, sqlx::Error> {
    Ok(Coating {
        id: row.try_get::<String, _>("id")?.into(),
        owner: row.try_get("owner")?,
        kind: row.try_get("kind")?,
        brand: row.try_get("brand")?,
        product: row.try_get("product")?,
        color: row.try_get("color")?,
        finish: row.try_get("finish")?,
        purchased_on: row.try_get("purchased_on")?,
        expires_on: row.try_get("expires_on")?,
        price: row.try_get("price")?,
        notes: row.try_get("notes")?,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        deleted_ts: row.try_get("deleted_ts")?,
    })
}

async fn add_coating_sqlite(
    backend: &SqliteBackend,
    owner: &str,
    fields: CoatingFields<'_>,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO coating (
    id,
    owner,
    kind,
    brand,
    product,
    color,
    finish,
    purchased_on,
    expires_on,
    price,
    notes,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12 )
        "#)
        .bind(id.as_str())
        .bind(owner)
        .bind(fields.kind)
        .bind(fields.brand)
        .bind(fields.product)
        .bind(fields.color)
        .bind(fields.finish)
        .bind(fields.purchased_on)
        .bind(fields.expires_on)
        .bind(fields.price)
        .bind(fields.notes)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_coating_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<Coating, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    owner,
    kind,
    brand,
    product,
    color,
    finish,
    purchased_on,
    expires_on,
    price,
    notes,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    coating
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(coating_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn list_coatings_for_location_sqlite(
    backend: &SqliteBackend,
    location_id: &Rid,
) -> Result<Coatings, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    coating.id,
    coating.owner,
    coating.kind,
    coating.brand,
    coating.product,
    coating.color,
    coating.finish,
    coating.purchased_on,
    coating.expires_on,
    coating.price,
    coating.notes,
    coating.created_ts,
    coating.updated_ts,
    coating.deleted_ts
FROM
    coating
JOIN location_coating ON location_coating.coating_id = coating.id
WHERE
    location_coating.location_id = ?1
ORDER BY
    coating.created_ts
        "#)
        .bind(location_id.as_str())
        .try_map(coating_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn list_coatings_for_room_sqlite(
    backend: &SqliteBackend,
    room_id: &Rid,
) -> Result<Coatings, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    coating.id,
    coating.owner,
    coating.kind,
    coating.brand,
    coating.product,
    coating.color,
    coating.finish,
    coating.purchased_on,
    coating.expires_on,
    coating.price,
    coating.notes,
    coating.created_ts,
    coating.updated_ts,
    coating.deleted_ts
FROM
    coating
JOIN room_coating ON room_coating.coating_id = coating.id
WHERE
    room_coating.room_id = ?1
ORDER BY
    coating.created_ts
        "#)
        .bind(room_id.as_str())
        .try_map(coating_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn link_coating_to_location_sqlite(
    backend: &SqliteBackend,
    coating_id: &Rid,
    location_id: &Rid,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO location_coating (
    location_id,
    coating_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(location_id.as_str())
        .bind(coating_id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn link_coating_to_room_sqlite(
    backend: &SqliteBackend,
    coating_id: &Rid,
    room_id: &Rid,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO room_coating (
    room_id,
    coating_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(room_id.as_str())
        .bind(coating_id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn update_coating_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
    fields: CoatingFields<'_>,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    coating
SET
    kind = ?1,
    brand = ?2,
    product = ?3,
    color = ?4,
    finish = ?5,
    purchased_on = ?6,
    expires_on = ?7,
    price = ?8,
    notes = ?9,
    updated_ts = ?10
WHERE
    id = ?11
        "#)
        .bind(fields.kind)
        .bind(fields.brand)
        .bind(fields.product)
        .bind(fields.color)
        .bind(fields.finish)
        .bind(fields.purchased_on)
        .bind(fields.expires_on)
        .bind(fields.price)
        .bind(fields.notes)
        .bind(ts)
        .bind(id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_coating_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    coating
SET
    deleted_ts = ?1,
    updated_ts = ?1
WHERE
    id = ?2 AND
    deleted_ts IS NULL
        "#)
        .bind(ts)
        .bind(id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl CoatingBackend for SqliteBackend {
    async fn add_coating(
        &self,
        owner: &str,
        fields: CoatingFields<'_>,
    ) -> Result<Rid, BackendError> {
        add_coating_sqlite(self, owner, fields).await
    }

    async fn get_coating_by_id(
        &self,
        id: &Rid,
    ) -> Result<Coating, BackendError> {
        get_coating_by_id_sqlite(self, id).await
    }

    async fn list_coatings_for_location(
        &self,
        location_id: &Rid,
    ) -> Result<Coatings, BackendError> {
        list_coatings_for_location_sqlite(self, location_id).await
    }

    async fn list_coatings_for_room(
        &self,
        room_id: &Rid,
    ) -> Result<Coatings, BackendError> {
        list_coatings_for_room_sqlite(self, room_id).await
    }

    async fn link_coating_to_location(
        &self,
        coating_id: &Rid,
        location_id: &Rid,
    ) -> Result<bool, BackendError> {
        link_coating_to_location_sqlite(self, coating_id, location_id).await
    }

    async fn link_coating_to_room(
        &self,
        coating_id: &Rid,
        room_id: &Rid,
    ) -> Result<bool, BackendError> {
        link_coating_to_room_sqlite(self, coating_id, room_id).await
    }

    async fn update_coating(
        &self,
        id: &Rid,
        fields: CoatingFields<'_>,
    ) -> Result<bool, BackendError> {
        update_coating_sqlite(self, id, fields).await
    }

    async fn delete_coating(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError> {
        delete_coating_sqlite(self, id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::coating::{
        CoatingFields,
        traits::CoatingBackend,
    };
    use test_hearth::inventory::make_location_with_room;
    use crate::SqliteBackend;

    #[tokio::test]
    async fn test_basic() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let cb: &dyn CoatingBackend = &backend;
        let id = cb.add_coating("alice", CoatingFields {
            kind: "paint",
            brand: Some("Resene"),
            color: Some("Half Tea"),
            finish: Some("eggshell"),
            price: Some(89.5),
            ..Default::default()
        }).await?;
        let coating = cb.get_coating_by_id(&id).await?;
        assert_eq!(coating.owner, "alice");
        assert_eq!(coating.kind, "paint");
        assert_eq!(coating.color.as_deref(), Some("Half Tea"));
        assert_eq!(coating.price, Some(89.5));
        assert_eq!(coating.created_ts, 1234567890);
        Ok(())
    }

    #[tokio::test]
    async fn test_linking() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, room_id) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let cb: &dyn CoatingBackend = &backend;
        let paint = cb.add_coating("alice", CoatingFields::of_kind("paint")).await?;
        let varnish = cb.add_coating("alice", CoatingFields::of_kind("varnish")).await?;

        assert!(cb.link_coating_to_location(&paint, &location_id).await?);
        // linking the same pair again is a no-op
        assert!(!cb.link_coating_to_location(&paint, &location_id).await?);
        assert!(cb.link_coating_to_room(&paint, &room_id).await?);
        assert!(cb.link_coating_to_room(&varnish, &room_id).await?);

        assert_eq!(cb.list_coatings_for_location(&location_id).await?.len(), 1);
        assert_eq!(cb.list_coatings_for_room(&room_id).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_soft_delete() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let cb: &dyn CoatingBackend = &backend;
        let id = cb.add_coating("alice", CoatingFields::of_kind("sealant")).await?;
        assert!(cb.update_coating(&id, CoatingFields {
            kind: "sealant",
            notes: Some("use up before winter"),
            ..Default::default()
        }).await?);
        assert!(cb.delete_coating(&id).await?);
        assert!(!cb.delete_coating(&id).await?);
        let coating = cb.get_coating_by_id(&id).await?;
        assert_eq!(coating.notes.as_deref(), Some("use up before winter"));
        assert_eq!(coating.deleted_ts, Some(1234567890));
        Ok(())
    }
}

use async_trait::async_trait;
use hearthcore::{
    error::BackendError,
    rid::Rid,
    room::{
        Room,
        RoomPhoto,
        RoomPhotos,
        Rooms,
        traits::{
            RoomBackend,
            RoomPhotoBackend,
        },
    },
};
use sqlx::{QueryBuilder, Row, Sqlite, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn room_from_row(row: SqliteRow) -> Result<Room, sqlx::Error> {
    Ok(Room {
        id: row.try_get::<String, _>("id")?.into(),
        location_id: row.try_get::<String, _>("location_id")?.into(),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        size: row.try_get("size")?,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        deleted_ts: row.try_get("deleted_ts")?,
    })
}

async fn add_room_sqlite(
    backend: &SqliteBackend,
    location_id: &Rid,
    name: &str,
    description: Option<&str>,
    size: Option<f64>,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO room (
    id,
    location_id,
    name,
    description,
    size,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?6 )
        "#)
        .bind(id.as_str())
        .bind(location_id.as_str())
        .bind(name)
        .bind(description)
        .bind(size)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_room_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<Room, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    location_id,
    name,
    description,
    size,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    room
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(room_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn list_rooms_for_location_sqlite(
    backend: &SqliteBackend,
    location_id: &Rid,
) -> Result<Rooms, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    location_id,
    name,
    description,
    size,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    room
WHERE
    location_id = ?1
ORDER BY
    name
        "#)
        .bind(location_id.as_str())
        .try_map(room_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn list_rooms_by_location_ids_sqlite(
    backend: &SqliteBackend,
    location_ids: &[Rid],
) -> Result<Rooms, BackendError> {
    if location_ids.is_empty() {
        return Ok(Rooms::default());
    }
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(r#"
SELECT
    id,
    location_id,
    name,
    description,
    size,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    room
WHERE
    location_id IN ("#);

    let mut separated = query_builder.separated(", ");
    for location_id in location_ids.iter() {
        separated.push_bind(location_id.as_str());
    }
    separated.push_unseparated(") ORDER BY name");

    let recs = query_builder
        .build()
        .try_map(room_from_row)
        .fetch_all(&*backend.pool)
        .await?;

    Ok(recs.into())
}

async fn update_room_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
    name: &str,
    description: Option<&str>,
    size: Option<f64>,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    room
SET
    name = ?1,
    description = ?2,
    size = ?3,
    updated_ts = ?4
WHERE
    id = ?5
        "#)
        .bind(name)
        .bind(description)
        .bind(size)
        .bind(ts)
        .bind(id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_room_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    room
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
impl RoomBackend for SqliteBackend {
    async fn add_room(
        &self,
        location_id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<Rid, BackendError> {
        add_room_sqlite(
            self,
            location_id,
            name,
            description,
            size,
        ).await
    }

    async fn get_room_by_id(
        &self,
        id: &Rid,
    ) -> Result<Room, BackendError> {
        get_room_by_id_sqlite(self, id).await
    }

    async fn list_rooms_for_location(
        &self,
        location_id: &Rid,
    ) -> Result<Rooms, BackendError> {
        list_rooms_for_location_sqlite(self, location_id).await
    }

    async fn list_rooms_by_location_ids(
        &self,
        location_ids: &[Rid],
    ) -> Result<Rooms, BackendError> {
        list_rooms_by_location_ids_sqlite(self, location_ids).await
    }

    async fn update_room(
        &self,
        id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<bool, BackendError> {
        update_room_sqlite(
            self,
            id,
            name,
            description,
            size,
        ).await
    }

    async fn delete_room(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError> {
        delete_room_sqlite(self, id).await
    }
}

fn room_photo_from_row(row: SqliteRow) -> Result<RoomPhoto, sqlx::Error> {
    Ok(RoomPhoto {
        id: row.try_get::<String, _>("id")?.into(),
        room_id: row.try_get::<String, _>("room_id")?.into(),
        image: row.try_get("image")?,
        caption: row.try_get("caption")?,
        taken_on: row.try_get("taken_on")?,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        deleted_ts: row.try_get("deleted_ts")?,
    })
}

async fn add_room_photo_sqlite(
    backend: &SqliteBackend,
    room_id: &Rid,
    image: &str,
    caption: Option<&str>,
    taken_on: Option<&str>,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO room_photo (
    id,
    room_id,
    image,
    caption,
    taken_on,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?6 )
        "#)
        .bind(id.as_str())
        .bind(room_id.as_str())
        .bind(image)
        .bind(caption)
        .bind(taken_on)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_room_photo_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<RoomPhoto, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    room_id,
    image,
    caption,
    taken_on,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    room_photo
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(room_photo_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn list_photos_for_room_sqlite(
    backend: &SqliteBackend,
    room_id: &Rid,
) -> Result<RoomPhotos, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    room_id,
    image,
    caption,
    taken_on,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    room_photo
WHERE
    room_id = ?1
ORDER BY
    created_ts
        "#)
        .bind(room_id.as_str())
        .try_map(room_photo_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

#[async_trait]
impl RoomPhotoBackend for SqliteBackend {
    async fn add_room_photo(
        &self,
        room_id: &Rid,
        image: &str,
        caption: Option<&str>,
        taken_on: Option<&str>,
    ) -> Result<Rid, BackendError> {
        add_room_photo_sqlite(
            self,
            room_id,
            image,
            caption,
            taken_on,
        ).await
    }

    async fn get_room_photo_by_id(
        &self,
        id: &Rid,
    ) -> Result<RoomPhoto, BackendError> {
        get_room_photo_by_id_sqlite(self, id).await
    }

    async fn list_photos_for_room(
        &self,
        room_id: &Rid,
    ) -> Result<RoomPhotos, BackendError> {
        list_photos_for_room_sqlite(self, room_id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::{
        rid::Rid,
        room::traits::{
            RoomBackend,
            RoomPhotoBackend,
        },
    };
    use crate::SqliteBackend;
    use crate::impls::location::testing::make_example_location;

    #[tokio::test]
    async fn test_basic() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let location_id = make_example_location(&backend, "alice").await?;
        let rb: &dyn RoomBackend = &backend;
        let id = rb.add_room(
            &location_id,
            "Kitchen",
            Some("north facing"),
            Some(12.5),
        ).await?;
        let room = rb.get_room_by_id(&id).await?;
        assert_eq!(room.location_id, location_id);
        assert_eq!(room.name, "Kitchen");
        assert_eq!(room.size, Some(12.5));
        assert_eq!(room.created_ts, 1234567890);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_room_requires_location() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let rb: &dyn RoomBackend = &backend;
        let err = rb.add_room(&Rid::from("no-such-location"), "Kitchen", None, None)
            .await
            .expect_err("room insert should not satisfy the foreign key");
        assert!(err.is_constraint_violation());
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_by_location_ids() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let l1 = make_example_location(&backend, "alice").await?;
        let l2 = make_example_location(&backend, "alice").await?;
        let l3 = make_example_location(&backend, "bob").await?;
        let rb: &dyn RoomBackend = &backend;
        rb.add_room(&l1, "Kitchen", None, None).await?;
        rb.add_room(&l1, "Bedroom", None, None).await?;
        rb.add_room(&l2, "Garage", None, None).await?;
        rb.add_room(&l3, "Attic", None, None).await?;

        assert_eq!(rb.list_rooms_for_location(&l1).await?.len(), 2);
        let rooms = rb.list_rooms_by_location_ids(&[l1.clone(), l2]).await?;
        assert_eq!(rooms.len(), 3);
        assert_eq!(rb.list_rooms_by_location_ids(&[]).await?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_photos() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let location_id = make_example_location(&backend, "alice").await?;
        let room_id = RoomBackend::add_room(&backend, &location_id, "Kitchen", None, None)
            .await?;
        let pb: &dyn RoomPhotoBackend = &backend;
        let photo_id = pb.add_room_photo(
            &room_id,
            "uploads/kitchen-1.jpg",
            Some("after repaint"),
            Some("2024-06-30"),
        ).await?;
        let photo = pb.get_room_photo_by_id(&photo_id).await?;
        assert_eq!(photo.room_id, room_id);
        assert_eq!(photo.caption.as_deref(), Some("after repaint"));

        pb.add_room_photo(&room_id, "uploads/kitchen-2.jpg", None, None).await?;
        assert_eq!(pb.list_photos_for_room(&room_id).await?.len(), 2);
        Ok(())
    }
}

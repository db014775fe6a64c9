use async_trait::async_trait;
use hearthcore::{
    ac::Agent,
    error::BackendError,
    location::{
        Location,
        Locations,
        traits::LocationBackend,
    },
    rid::Rid,
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn location_from_row(row: SqliteRow) -> Result<Location, sqlx::Error> {
    Ok(Location {
        id: row.try_get::<String, _>("id")?.into(),
        owner: row.try_get("owner")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        image: row.try_get("image")?,
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        deleted_ts: row.try_get("deleted_ts")?,
    })
}

async fn add_location_sqlite(
    backend: &SqliteBackend,
    owner: &str,
    name: &str,
    address: &str,
    image: Option<&str>,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO location (
    id,
    owner,
    name,
    address,
    image,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?6 )
        "#)
        .bind(id.as_str())
        .bind(owner)
        .bind(name)
        .bind(address)
        .bind(image)
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_location_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<Location, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    owner,
    name,
    address,
    image,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    location
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(location_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn list_locations_for_agent_sqlite(
    backend: &SqliteBackend,
    agent: &Agent,
) -> Result<Locations, BackendError> {
    let user_id = match agent.user_id() {
        Some(user_id) => user_id,
        None => return Ok(Locations::default()),
    };
    // DISTINCT folds locations that match both the direct owner and a
    // group share into a single entry.
    let recs = sqlx::query(r#"
SELECT DISTINCT
    location.id,
    location.owner,
    location.name,
    location.address,
    location.image,
    location.created_ts,
    location.updated_ts,
    location.deleted_ts
FROM
    location
LEFT JOIN location_ugroup ON location_ugroup.location_id = location.id
LEFT JOIN ugroup_member ON ugroup_member.group_id = location_ugroup.group_id
WHERE
    location.owner = ?1 OR ugroup_member.user_id = ?1
ORDER BY
    location.created_ts DESC
        "#)
        .bind(user_id)
        .try_map(location_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn update_location_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
    name: &str,
    address: &str,
    image: Option<&str>,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    location
SET
    name = ?1,
    address = ?2,
    image = ?3,
    updated_ts = ?4
WHERE
    id = ?5
        "#)
        .bind(name)
        .bind(address)
        .bind(image)
        .bind(ts)
        .bind(id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_location_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    location
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

async fn share_location_with_group_sqlite(
    backend: &SqliteBackend,
    location_id: &Rid,
    group_id: &Rid,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO location_ugroup (
    location_id,
    group_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(location_id.as_str())
        .bind(group_id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

#[async_trait]
impl LocationBackend for SqliteBackend {
    async fn add_location(
        &self,
        owner: &str,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<Rid, BackendError> {
        add_location_sqlite(
            self,
            owner,
            name,
            address,
            image,
        ).await
    }

    async fn get_location_by_id(
        &self,
        id: &Rid,
    ) -> Result<Location, BackendError> {
        get_location_by_id_sqlite(self, id).await
    }

    async fn list_locations_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Locations, BackendError> {
        list_locations_for_agent_sqlite(self, agent).await
    }

    async fn update_location(
        &self,
        id: &Rid,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<bool, BackendError> {
        update_location_sqlite(
            self,
            id,
            name,
            address,
            image,
        ).await
    }

    async fn delete_location(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError> {
        delete_location_sqlite(self, id).await
    }

    async fn share_location_with_group(
        &self,
        location_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, BackendError> {
        share_location_with_group_sqlite(self, location_id, group_id).await
    }
}

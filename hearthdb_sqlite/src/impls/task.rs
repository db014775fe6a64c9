use async_trait::async_trait;
use std::str::FromStr;
use hearthcore::{
    ac::Agent,
    error::BackendError,
    rid::Rid,
    task::{
        TargetKind,
        Task,
        TaskTarget,
        Tasks,
        traits::TaskBackend,
    },
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    SqliteBackend,
    chrono::Utc,
};

fn task_from_row(row: SqliteRow) -> Result<Task, sqlx::Error> {
    let kind = TargetKind::from_str(row.try_get::<String, _>("target_kind")?.as_ref())
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "target_kind".to_string(),
            source: Box::new(e),
        })?;
    Ok(Task {
        id: row.try_get::<String, _>("id")?.into(),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        recurrence: row.try_get("recurrence")?,
        scheduled_ts: row.try_get("scheduled_ts")?,
        target: TaskTarget {
            kind,
            id: row.try_get::<String, _>("target_id")?.into(),
        },
        created_ts: row.try_get("created_ts")?,
        updated_ts: row.try_get("updated_ts")?,
        deleted_ts: row.try_get("deleted_ts")?,
    })
}

async fn add_task_sqlite(
    backend: &SqliteBackend,
    target: &TaskTarget,
    name: &str,
    description: Option<&str>,
    recurrence: Option<&str>,
    scheduled_ts: Option<i64>,
) -> Result<Rid, BackendError> {
    let id = Rid::generate();
    let ts = Utc::now().timestamp();
    sqlx::query(r#"
INSERT INTO task (
    id,
    name,
    description,
    recurrence,
    scheduled_ts,
    target_kind,
    target_id,
    created_ts,
    updated_ts
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8 )
        "#)
        .bind(id.as_str())
        .bind(name)
        .bind(description)
        .bind(recurrence)
        .bind(scheduled_ts)
        .bind(target.kind.as_str())
        .bind(target.id.as_str())
        .bind(ts)
        .execute(&*backend.pool)
        .await?;
    Ok(id)
}

async fn get_task_by_id_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<Task, BackendError> {
    let rec = sqlx::query(r#"
SELECT
    id,
    name,
    description,
    recurrence,
    scheduled_ts,
    target_kind,
    target_id,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    task
WHERE
    id = ?1
        "#)
        .bind(id.as_str())
        .try_map(task_from_row)
        .fetch_one(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn list_tasks_for_target_sqlite(
    backend: &SqliteBackend,
    kind: TargetKind,
    target_id: &Rid,
) -> Result<Tasks, BackendError> {
    let recs = sqlx::query(r#"
SELECT
    id,
    name,
    description,
    recurrence,
    scheduled_ts,
    target_kind,
    target_id,
    created_ts,
    updated_ts,
    deleted_ts
FROM
    task
WHERE
    target_kind = ?1 AND
    target_id = ?2
ORDER BY
    scheduled_ts
        "#)
        .bind(kind.as_str())
        .bind(target_id.as_str())
        .try_map(task_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn list_tasks_for_agent_sqlite(
    backend: &SqliteBackend,
    agent: &Agent,
) -> Result<Tasks, BackendError> {
    let user_id = match agent.user_id() {
        Some(user_id) => user_id,
        None => return Ok(Tasks::default()),
    };
    let recs = sqlx::query(r#"
SELECT DISTINCT
    task.id,
    task.name,
    task.description,
    task.recurrence,
    task.scheduled_ts,
    task.target_kind,
    task.target_id,
    task.created_ts,
    task.updated_ts,
    task.deleted_ts
FROM
    task
JOIN task_ugroup ON task_ugroup.task_id = task.id
JOIN ugroup_member ON ugroup_member.group_id = task_ugroup.group_id
WHERE
    ugroup_member.user_id = ?1
ORDER BY
    task.scheduled_ts
        "#)
        .bind(user_id)
        .try_map(task_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn assign_task_to_group_sqlite(
    backend: &SqliteBackend,
    task_id: &Rid,
    group_id: &Rid,
) -> Result<bool, BackendError> {
    let rows_affected = sqlx::query(r#"
INSERT OR IGNORE INTO task_ugroup (
    task_id,
    group_id
)
VALUES ( ?1, ?2 )
        "#)
        .bind(task_id.as_str())
        .bind(group_id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn update_task_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
    name: &str,
    description: Option<&str>,
    recurrence: Option<&str>,
    scheduled_ts: Option<i64>,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    task
SET
    name = ?1,
    description = ?2,
    recurrence = ?3,
    scheduled_ts = ?4,
    updated_ts = ?5
WHERE
    id = ?6
        "#)
        .bind(name)
        .bind(description)
        .bind(recurrence)
        .bind(scheduled_ts)
        .bind(ts)
        .bind(id.as_str())
        .execute(&*backend.pool)
        .await?
        .rows_affected();
    Ok(rows_affected > 0)
}

async fn delete_task_sqlite(
    backend: &SqliteBackend,
    id: &Rid,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    let rows_affected = sqlx::query(r#"
UPDATE
    task
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
impl TaskBackend for SqliteBackend {
    async fn add_task(
        &self,
        target: &TaskTarget,
        name: &str,
        description: Option<&str>,
        recurrence: Option<&str>,
        scheduled_ts: Option<i64>,
    ) -> Result<Rid, BackendError> {
        add_task_sqlite(
            self,
            target,
            name,
            description,
            recurrence,
            scheduled_ts,
        ).await
    }

    async fn get_task_by_id(
        &self,
        id: &Rid,
    ) -> Result<Task, BackendError> {
        get_task_by_id_sqlite(self, id).await
    }

    async fn list_tasks_for_target(
        &self,
        kind: TargetKind,
        target_id: &Rid,
    ) -> Result<Tasks, BackendError> {
        list_tasks_for_target_sqlite(self, kind, target_id).await
    }

    async fn list_tasks_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Tasks, BackendError> {
        list_tasks_for_agent_sqlite(self, agent).await
    }

    async fn assign_task_to_group(
        &self,
        task_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, BackendError> {
        assign_task_to_group_sqlite(self, task_id, group_id).await
    }

    async fn update_task(
        &self,
        id: &Rid,
        name: &str,
        description: Option<&str>,
        recurrence: Option<&str>,
        scheduled_ts: Option<i64>,
    ) -> Result<bool, BackendError> {
        update_task_sqlite(
            self,
            id,
            name,
            description,
            recurrence,
            scheduled_ts,
        ).await
    }

    async fn delete_task(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError> {
        delete_task_sqlite(self, id).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use hearthcore::{
        ac::{
            Agent,
            traits::GroupBackend,
        },
        task::{
            TargetKind,
            TaskTarget,
            traits::TaskBackend,
        },
    };
    use test_hearth::inventory::{
        make_location_with_room,
        make_named_item,
    };
    use crate::SqliteBackend;

    #[tokio::test]
    async fn test_basic() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, _) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let tb: &dyn TaskBackend = &backend;
        let id = tb.add_task(
            &TaskTarget::location(location_id.clone()),
            "Clean gutters",
            Some("both sides of the roof"),
            Some("every 6 months"),
            Some(1240000000),
        ).await?;
        let task = tb.get_task_by_id(&id).await?;
        assert_eq!(task.name, "Clean gutters");
        assert_eq!(task.target, TaskTarget::location(location_id));
        assert_eq!(task.recurrence.as_deref(), Some("every 6 months"));
        assert_eq!(task.created_ts, 1234567890);
        Ok(())
    }

    #[tokio::test]
    async fn test_target_listing_is_exact() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, room_id) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let item_id = make_named_item(
            &backend,
            "alice",
            &location_id,
            Some(&room_id),
            "Boiler",
        ).await?;
        let tb: &dyn TaskBackend = &backend;
        let service = tb.add_task(
            &TaskTarget::item(item_id.clone()),
            "Service boiler",
            None,
            Some("yearly"),
            None,
        ).await?;
        tb.add_task(
            &TaskTarget::room(room_id.clone()),
            "Repaint",
            None,
            None,
            None,
        ).await?;
        // same id under a different kind must not be picked up
        tb.add_task(
            &TaskTarget::location(location_id),
            "Check insurance",
            None,
            None,
            None,
        ).await?;

        let tasks = tb.list_tasks_for_target(TargetKind::Item, &item_id).await?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, service);
        assert_eq!(
            tb.list_tasks_for_target(TargetKind::Location, &item_id).await?.len(),
            0,
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_group_ownership() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, _) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let tb: &dyn TaskBackend = &backend;
        let task_id = tb.add_task(
            &TaskTarget::location(location_id),
            "Mow lawn",
            None,
            Some("weekly"),
            None,
        ).await?;

        let household = backend.add_group("household").await?;
        let sitters = backend.add_group("house sitters").await?;
        backend.add_group_member(&household, "alice").await?;
        backend.add_group_member(&sitters, "alice").await?;
        backend.add_group_member(&household, "bob").await?;

        assert!(tb.assign_task_to_group(&task_id, &household).await?);
        assert!(!tb.assign_task_to_group(&task_id, &household).await?);
        assert!(tb.assign_task_to_group(&task_id, &sitters).await?);

        // alice reaches the task through two groups yet sees it once
        let tasks = tb.list_tasks_for_agent(&Agent::from("alice")).await?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tb.list_tasks_for_agent(&Agent::from("bob")).await?.len(), 1);
        assert_eq!(tb.list_tasks_for_agent(&Agent::from("carol")).await?.len(), 0);
        assert_eq!(tb.list_tasks_for_agent(&Agent::Anonymous).await?.len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_soft_delete() -> anyhow::Result<()> {
        let backend = SqliteBackend::from_url("sqlite::memory:").await?;
        let (location_id, _) =
            make_location_with_room(&backend, "alice", "Lake House").await?;
        let tb: &dyn TaskBackend = &backend;
        let id = tb.add_task(
            &TaskTarget::location(location_id),
            "Flush water heater",
            None,
            None,
            None,
        ).await?;
        assert!(tb.update_task(
            &id,
            "Flush water heater",
            Some("drain from the bottom valve"),
            Some("yearly"),
            Some(1250000000),
        ).await?);
        assert!(tb.delete_task(&id).await?);
        assert!(!tb.delete_task(&id).await?);
        let task = tb.get_task_by_id(&id).await?;
        assert_eq!(task.recurrence.as_deref(), Some("yearly"));
        assert_eq!(task.deleted_ts, Some(1234567890));
        Ok(())
    }
}

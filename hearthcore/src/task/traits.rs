use async_trait::async_trait;
use crate::{
    ac::Agent,
    error::BackendError,
    rid::Rid,
};
use super::{TargetKind, Task, TaskTarget, Tasks};

#[async_trait]
pub trait TaskBackend {
    async fn add_task(
        &self,
        target: &TaskTarget,
        name: &str,
        description: Option<&str>,
        recurrence: Option<&str>,
        scheduled_ts: Option<i64>,
    ) -> Result<Rid, BackendError>;
    async fn get_task_by_id(
        &self,
        id: &Rid,
    ) -> Result<Task, BackendError>;
    /// Tasks whose target matches the pair exactly.
    async fn list_tasks_for_target(
        &self,
        kind: TargetKind,
        target_id: &Rid,
    ) -> Result<Tasks, BackendError>;
    /// Tasks owned by any group the agent is a member of.
    async fn list_tasks_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Tasks, BackendError>;
    /// Returns false when the task was already assigned to the group.
    async fn assign_task_to_group(
        &self,
        task_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, BackendError>;
    async fn update_task(
        &self,
        id: &Rid,
        name: &str,
        description: Option<&str>,
        recurrence: Option<&str>,
        scheduled_ts: Option<i64>,
    ) -> Result<bool, BackendError>;
    async fn delete_task(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError>;
}

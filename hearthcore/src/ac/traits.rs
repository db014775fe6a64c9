use async_trait::async_trait;
use crate::error::BackendError;
use crate::rid::Rid;
use super::group::{Group, Groups};

#[async_trait]
pub trait GroupBackend {
    async fn add_group(
        &self,
        name: &str,
    ) -> Result<Rid, BackendError>;
    async fn get_group_by_id(
        &self,
        id: &Rid,
    ) -> Result<Group, BackendError>;
    /// Returns false when the membership was already present.
    async fn add_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, BackendError>;
    async fn remove_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, BackendError>;
    async fn list_groups_for_user(
        &self,
        user_id: &str,
    ) -> Result<Groups, BackendError>;
}

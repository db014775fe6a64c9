use async_trait::async_trait;
use crate::{
    ac::Agent,
    error::BackendError,
    rid::Rid,
};
use super::{Location, Locations};

#[async_trait]
pub trait LocationBackend {
    async fn add_location(
        &self,
        owner: &str,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<Rid, BackendError>;
    async fn get_location_by_id(
        &self,
        id: &Rid,
    ) -> Result<Location, BackendError>;
    /// Locations the agent owns directly unioned with those shared
    /// through any of the agent's groups; each location appears once.
    async fn list_locations_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Locations, BackendError>;
    async fn update_location(
        &self,
        id: &Rid,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<bool, BackendError>;
    /// Soft delete; the row remains with its deleted timestamp set.
    async fn delete_location(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError>;
    /// Returns false when the share was already in place.
    async fn share_location_with_group(
        &self,
        location_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, BackendError>;
}

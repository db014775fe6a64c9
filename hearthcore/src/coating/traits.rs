use async_trait::async_trait;
use crate::{
    error::BackendError,
    rid::Rid,
};
use super::{Coating, CoatingFields, Coatings};

#[async_trait]
pub trait CoatingBackend {
    async fn add_coating(
        &self,
        owner: &str,
        fields: CoatingFields<'_>,
    ) -> Result<Rid, BackendError>;
    async fn get_coating_by_id(
        &self,
        id: &Rid,
    ) -> Result<Coating, BackendError>;
    async fn list_coatings_for_location(
        &self,
        location_id: &Rid,
    ) -> Result<Coatings, BackendError>;
    async fn list_coatings_for_room(
        &self,
        room_id: &Rid,
    ) -> Result<Coatings, BackendError>;
    /// Returns false when the link was already in place.
    async fn link_coating_to_location(
        &self,
        coating_id: &Rid,
        location_id: &Rid,
    ) -> Result<bool, BackendError>;
    async fn link_coating_to_room(
        &self,
        coating_id: &Rid,
        room_id: &Rid,
    ) -> Result<bool, BackendError>;
    async fn update_coating(
        &self,
        id: &Rid,
        fields: CoatingFields<'_>,
    ) -> Result<bool, BackendError>;
    async fn delete_coating(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError>;
}

use async_trait::async_trait;
use crate::{
    error::BackendError,
    rid::Rid,
};
use super::{Item, ItemFields, Items};

#[async_trait]
pub trait ItemBackend {
    async fn add_item(
        &self,
        owner: &str,
        location_id: &Rid,
        room_id: Option<&Rid>,
        fields: ItemFields<'_>,
    ) -> Result<Rid, BackendError>;
    async fn get_item_by_id(
        &self,
        id: &Rid,
    ) -> Result<Item, BackendError>;
    async fn list_items_for_room(
        &self,
        room_id: &Rid,
    ) -> Result<Items, BackendError>;
    /// Items across the given locations, most recently created first.
    async fn list_items_by_location_ids(
        &self,
        location_ids: &[Rid],
    ) -> Result<Items, BackendError>;
    async fn update_item(
        &self,
        id: &Rid,
        fields: ItemFields<'_>,
    ) -> Result<bool, BackendError>;
    async fn delete_item(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError>;
}

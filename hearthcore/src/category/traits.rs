use async_trait::async_trait;
use crate::{
    error::BackendError,
    rid::Rid,
};
use super::Categories;

#[async_trait]
pub trait CategoryBackend {
    /// Category names are unique; adding an existing name returns the
    /// id of the record already in place.
    async fn add_category(
        &self,
        name: &str,
    ) -> Result<Rid, BackendError>;
    async fn list_categories(
        &self,
    ) -> Result<Categories, BackendError>;
    /// Tags are an order-irrelevant set; tagging an item twice with
    /// the same category is a no-op and returns false.
    async fn tag_item(
        &self,
        item_id: &Rid,
        category_id: &Rid,
    ) -> Result<bool, BackendError>;
    async fn list_categories_for_item(
        &self,
        item_id: &Rid,
    ) -> Result<Categories, BackendError>;
}

use async_trait::async_trait;
use crate::{
    error::BackendError,
    rid::Rid,
};
use super::{Room, RoomPhoto, RoomPhotos, Rooms};

#[async_trait]
pub trait RoomBackend {
    async fn add_room(
        &self,
        location_id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<Rid, BackendError>;
    async fn get_room_by_id(
        &self,
        id: &Rid,
    ) -> Result<Room, BackendError>;
    async fn list_rooms_for_location(
        &self,
        location_id: &Rid,
    ) -> Result<Rooms, BackendError>;
    async fn list_rooms_by_location_ids(
        &self,
        location_ids: &[Rid],
    ) -> Result<Rooms, BackendError>;
    async fn update_room(
        &self,
        id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<bool, BackendError>;
    async fn delete_room(
        &self,
        id: &Rid,
    ) -> Result<bool, BackendError>;
}

#[async_trait]
pub trait RoomPhotoBackend {
    async fn add_room_photo(
        &self,
        room_id: &Rid,
        image: &str,
        caption: Option<&str>,
        taken_on: Option<&str>,
    ) -> Result<Rid, BackendError>;
    async fn get_room_photo_by_id(
        &self,
        id: &Rid,
    ) -> Result<RoomPhoto, BackendError>;
    async fn list_photos_for_room(
        &self,
        room_id: &Rid,
    ) -> Result<RoomPhotos, BackendError>;
}

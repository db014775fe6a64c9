use serde::{Deserialize, Serialize};
use crate::rid::Rid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Room {
    pub id: Rid,
    pub location_id: Rid,
    pub name: String,
    pub description: Option<String>,
    /// Floor area in square metres.
    pub size: Option<f64>,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Rooms(Vec<Room>);

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RoomPhoto {
    pub id: Rid,
    pub room_id: Rid,
    pub image: String,
    pub caption: Option<String>,
    /// ISO-8601 date the photograph was taken on.
    pub taken_on: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RoomPhotos(Vec<RoomPhoto>);

mod impls;
pub mod traits;

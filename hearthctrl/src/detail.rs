//! Aggregated views assembled by the platform for presentation.

use hearthcore::{
    category::Categories,
    coating::Coatings,
    item::{
        Item,
        Items,
    },
    location::{
        Location,
        Locations,
    },
    room::{
        Room,
        RoomPhotos,
        Rooms,
    },
    task::Tasks,
};
use serde::Serialize;

/// Everything shown on the landing page for a signed-in user.
#[derive(Clone, Debug, Serialize)]
pub struct Dashboard {
    pub locations: Locations,
    pub rooms: Rooms,
    pub items: Items,
    pub tasks: Tasks,
}

#[derive(Clone, Debug, Serialize)]
pub struct LocationDetail {
    pub location: Location,
    pub rooms: Rooms,
    pub coatings: Coatings,
    pub tasks: Tasks,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoomDetail {
    pub room: Room,
    pub items: Items,
    pub photos: RoomPhotos,
    pub coatings: Coatings,
    pub tasks: Tasks,
}

#[derive(Clone, Debug, Serialize)]
pub struct ItemDetail {
    pub item: Item,
    pub categories: Categories,
    pub tasks: Tasks,
}

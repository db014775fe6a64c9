use std::ops::{
    Deref,
    DerefMut,
};
use crate::room::*;

impl From<Vec<Room>> for Rooms {
    fn from(args: Vec<Room>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Room; N]> for Rooms {
    fn from(args: [Room; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Rooms {
    type Target = Vec<Room>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Rooms {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<RoomPhoto>> for RoomPhotos {
    fn from(args: Vec<RoomPhoto>) -> Self {
        Self(args)
    }
}

impl Deref for RoomPhotos {
    type Target = Vec<RoomPhoto>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

use crate::{
    ac::traits::GroupBackend,
    category::traits::CategoryBackend,
    coating::traits::CoatingBackend,
    item::traits::ItemBackend,
    location::traits::LocationBackend,
    platform::PlatformUrl,
    profile::traits::ProfileBackend,
    room::traits::{
        RoomBackend,
        RoomPhotoBackend,
    },
    task::traits::TaskBackend,
};

/// InventoryPlatform - the home inventory store
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait InventoryPlatform: GroupBackend
    + ProfileBackend
    + LocationBackend
    + RoomBackend
    + RoomPhotoBackend
    + ItemBackend
    + CategoryBackend
    + CoatingBackend
    + TaskBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn InventoryPlatform;
}

pub trait DefaultInventoryPlatform: InventoryPlatform {}

impl<P: GroupBackend
    + ProfileBackend
    + LocationBackend
    + RoomBackend
    + RoomPhotoBackend
    + ItemBackend
    + CategoryBackend
    + CoatingBackend
    + TaskBackend

    + PlatformUrl

    + DefaultInventoryPlatform

    + Send
    + Sync
> InventoryPlatform for P {
    fn as_dyn(&self) -> &(dyn InventoryPlatform) {
        self
    }
}

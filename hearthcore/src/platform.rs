mod inventory;
pub use inventory::{DefaultInventoryPlatform, InventoryPlatform};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}

pub mod chrono;
pub mod inventory;

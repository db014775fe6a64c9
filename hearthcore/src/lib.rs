pub mod ac;
pub mod category;
pub mod coating;
pub mod error;
pub mod item;
pub mod location;
pub mod platform;
pub mod profile;
pub mod rid;
pub mod room;
pub mod task;

pub mod agent;
pub mod group;
pub mod traits;

pub use self::agent::Agent;
pub use self::group::{Group, Groups};

use serde::{Deserialize, Serialize};
use crate::rid::Rid;

/// A place whose contents are being tracked.  Owned by exactly one
/// account identity, set at creation and never reassigned; optionally
/// shared with owner-groups.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub id: Rid,
    pub owner: String,
    pub name: String,
    pub address: String,
    pub image: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Locations(Vec<Location>);

mod impls;
pub mod traits;

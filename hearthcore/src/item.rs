use serde::{Deserialize, Serialize};
use crate::rid::Rid;

/// A possession tracked under a location, optionally placed in one of
/// its rooms.  Owned by exactly one account identity.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Item {
    pub id: Rid,
    pub owner: String,
    pub location_id: Rid,
    pub room_id: Option<Rid>,
    pub name: String,
    pub description: Option<String>,
    /// ISO-8601 purchase date.
    pub purchased_on: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub notes: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Items(Vec<Item>);

/// The free-form attributes of an item, shared between the add and
/// update operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemFields<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub purchased_on: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub model: Option<&'a str>,
    pub serial: Option<&'a str>,
    pub notes: Option<&'a str>,
}

mod impls;
pub mod traits;

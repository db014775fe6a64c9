use serde::{Deserialize, Serialize};
use crate::rid::Rid;

/// A protective or decorative surface product (paint, varnish, sealant)
/// applied somewhere in the inventory; linked to any number of
/// locations and rooms.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Coating {
    pub id: Rid,
    pub owner: String,
    pub kind: String,
    pub brand: Option<String>,
    pub product: Option<String>,
    pub color: Option<String>,
    pub finish: Option<String>,
    pub purchased_on: Option<String>,
    pub expires_on: Option<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Coatings(Vec<Coating>);

/// The descriptive attributes of a coating, shared between the add and
/// update operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoatingFields<'a> {
    pub kind: &'a str,
    pub brand: Option<&'a str>,
    pub product: Option<&'a str>,
    pub color: Option<&'a str>,
    pub finish: Option<&'a str>,
    pub purchased_on: Option<&'a str>,
    pub expires_on: Option<&'a str>,
    pub price: Option<f64>,
    pub notes: Option<&'a str>,
}

mod impls {
    use std::ops::{Deref, DerefMut};
    use super::*;

    impl From<Vec<Coating>> for Coatings {
        fn from(args: Vec<Coating>) -> Self {
            Self(args)
        }
    }

    impl Deref for Coatings {
        type Target = Vec<Coating>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl DerefMut for Coatings {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }

    impl<'a> CoatingFields<'a> {
        pub fn of_kind(kind: &'a str) -> Self {
            Self {
                kind,
                ..Default::default()
            }
        }
    }
}

pub mod traits;

use serde::{Deserialize, Serialize};
use crate::rid::Rid;

/// A named collection of account identities.  Groups may be granted
/// shared access to locations and own tasks independently of direct
/// ownership.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub id: Rid,
    pub name: String,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Groups(Vec<Group>);

mod impls {
    use std::ops::{Deref, DerefMut};
    use super::*;

    impl From<Vec<Group>> for Groups {
        fn from(args: Vec<Group>) -> Self {
            Self(args)
        }
    }

    impl Deref for Groups {
        type Target = Vec<Group>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl DerefMut for Groups {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
}

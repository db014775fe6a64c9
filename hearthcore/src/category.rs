use serde::{Deserialize, Serialize};
use crate::rid::Rid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: Rid,
    pub name: String,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Categories(Vec<Category>);

mod impls {
    use std::ops::{Deref, DerefMut};
    use super::*;

    impl From<Vec<Category>> for Categories {
        fn from(args: Vec<Category>) -> Self {
            Self(args)
        }
    }

    impl Deref for Categories {
        type Target = Vec<Category>;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl DerefMut for Categories {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
}

pub mod traits;

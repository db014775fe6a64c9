use std::ops::{
    Deref,
    DerefMut,
};
use crate::item::*;

impl From<Vec<Item>> for Items {
    fn from(args: Vec<Item>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Item; N]> for Items {
    fn from(args: [Item; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Items {
    type Target = Vec<Item>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Items {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> ItemFields<'a> {
    pub fn named(name: &'a str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

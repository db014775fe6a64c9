use std::ops::{
    Deref,
    DerefMut,
};
use crate::location::*;

impl From<Vec<Location>> for Locations {
    fn from(args: Vec<Location>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Location; N]> for Locations {
    fn from(args: [Location; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Locations {
    type Target = Vec<Location>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Locations {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

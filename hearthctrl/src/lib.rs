pub mod detail;
pub mod error;
pub mod platform;

pub use platform::{
    Builder,
    Platform,
};

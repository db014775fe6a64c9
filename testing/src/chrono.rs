/// A pinned stand-in for `chrono::Utc` so timestamp columns written
/// during tests carry a known value.
pub struct Utc;

pub struct FixedDateTime;

impl Utc {
    pub fn now() -> FixedDateTime {
        FixedDateTime
    }
}

impl FixedDateTime {
    pub fn timestamp(&self) -> i64 {
        1234567890
    }
}

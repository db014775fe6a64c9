use serde::{Deserialize, Serialize};

/// The random record identifier used as the primary key for all
/// inventory entities; rendered as 32 hexadecimal digits.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Rid(String);

impl Rid {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(feature = "rand")]
impl Rid {
    pub fn generate() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }
}

mod impls {
    use std::fmt::{Display, Formatter, Result};
    use super::*;

    impl From<String> for Rid {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for Rid {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    impl Display for Rid {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "{}", self.0)
        }
    }
}

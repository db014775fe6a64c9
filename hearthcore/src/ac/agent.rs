use serde::{Deserialize, Serialize};

/// The identity making a request.  Resolved by the authentication
/// collaborator at the boundary and passed explicitly into every query
/// and mutation; there is no ambient identity anywhere.
#[derive(Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Agent {
    #[default]
    Anonymous,
    User(String),
}

mod impls {
    use std::fmt::{Display, Formatter, Result};
    use super::*;

    impl Agent {
        /// The account identity, if one was authenticated.
        pub fn user_id(&self) -> Option<&str> {
            match self {
                Agent::Anonymous => None,
                Agent::User(id) => Some(id.as_ref()),
            }
        }
    }

    impl From<&str> for Agent {
        fn from(value: &str) -> Self {
            Agent::User(value.to_string())
        }
    }

    impl From<String> for Agent {
        fn from(value: String) -> Self {
            Agent::User(value)
        }
    }

    impl Display for Agent {
        fn fmt(&self, f: &mut Formatter) -> Result {
            match self {
                Agent::Anonymous => write!(f, "<anonymous>"),
                Agent::User(id) => write!(f, "{id}"),
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Per-account profile record, keyed directly by the external account
/// identity rather than a random record id.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub avatar: Option<String>,
}

pub mod traits;

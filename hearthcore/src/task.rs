use serde::{Deserialize, Serialize};
use crate::rid::Rid;

/// The kind of entity a task is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Location,
    Room,
    Item,
}

/// The single entity a task is attached to, resolved by the explicit
/// kind and the record id; the pair is never null.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct TaskTarget {
    pub kind: TargetKind,
    pub id: Rid,
}

/// A recurring maintenance chore.  Owned by one or more groups rather
/// than a single account.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: Rid,
    pub name: String,
    pub description: Option<String>,
    /// Human-entered recurrence rule, e.g. `"every 3 months"`.
    pub recurrence: Option<String>,
    pub scheduled_ts: Option<i64>,
    pub target: TaskTarget,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub deleted_ts: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Tasks(Vec<Task>);

mod impls;
pub mod traits;

pub use impls::InvalidTargetKind;

use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
    str::FromStr,
};
use thiserror::Error;
use crate::rid::Rid;
use crate::task::*;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid task target kind: {0}")]
pub struct InvalidTargetKind(String);

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Location => "location",
            TargetKind::Room => "room",
            TargetKind::Item => "item",
        }
    }
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = InvalidTargetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(TargetKind::Location),
            "room" => Ok(TargetKind::Room),
            "item" => Ok(TargetKind::Item),
            s => Err(InvalidTargetKind(s.to_string())),
        }
    }
}

impl TaskTarget {
    pub fn location(id: impl Into<Rid>) -> Self {
        Self {
            kind: TargetKind::Location,
            id: id.into(),
        }
    }

    pub fn room(id: impl Into<Rid>) -> Self {
        Self {
            kind: TargetKind::Room,
            id: id.into(),
        }
    }

    pub fn item(id: impl Into<Rid>) -> Self {
        Self {
            kind: TargetKind::Item,
            id: id.into(),
        }
    }
}

impl From<Vec<Task>> for Tasks {
    fn from(args: Vec<Task>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Task; N]> for Tasks {
    fn from(args: [Task; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Tasks {
    type Target = Vec<Task>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Tasks {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod testing {
    use std::str::FromStr;
    use super::*;

    #[test]
    fn target_kind_round_trip() -> anyhow::Result<()> {
        for kind in [TargetKind::Location, TargetKind::Room, TargetKind::Item] {
            assert_eq!(TargetKind::from_str(kind.as_str())?, kind);
        }
        assert!(TargetKind::from_str("coating").is_err());
        Ok(())
    }

    #[test]
    fn target_kind_serde_form() -> anyhow::Result<()> {
        let target = TaskTarget::item("00c0ffee00c0ffee00c0ffee00c0ffee");
        assert_eq!(
            serde_json::to_string(&target)?,
            r#"{"kind":"item","id":"00c0ffee00c0ffee00c0ffee00c0ffee"}"#,
        );
        Ok(())
    }
}

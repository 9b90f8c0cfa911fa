//! Target definitions (organism databases the portal can operate against)

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a target, e.g. `Vibrio_cholerae`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TargetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TargetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Whether a listed target can be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Selectable,
    /// Listed for visibility (upcoming organism), never choosable
    Disabled,
}

impl Availability {
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Selectable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selectable => "selectable",
            Self::Disabled => "disabled",
        }
    }
}

/// A species/database entry of the selection control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub display_name: String,
    #[serde(default)]
    pub availability: Availability,
}

impl Target {
    pub fn selectable(id: impl Into<TargetId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            availability: Availability::Selectable,
        }
    }

    pub fn disabled(id: impl Into<TargetId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            availability: Availability::Disabled,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.availability.is_selectable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_compares_with_str() {
        let id = TargetId::from("Vibrio_cholerae");
        assert_eq!(id, "Vibrio_cholerae");
        assert_eq!(id.as_str(), "Vibrio_cholerae");
        assert_eq!(id.to_string(), "Vibrio_cholerae");
    }

    #[test]
    fn test_availability_defaults_to_selectable() {
        let target: Target =
            ron::from_str(r#"(id: "Salmonella_enterica", display_name: "Salmonella enterica")"#)
                .unwrap();
        assert!(target.is_selectable());

        let target: Target = ron::from_str(
            r#"(id: "Listeria_monocytogenes", display_name: "Listeria monocytogenes", availability: Disabled)"#,
        )
        .unwrap();
        assert!(!target.is_selectable());
        assert_eq!(target.availability.as_str(), "disabled");
    }
}

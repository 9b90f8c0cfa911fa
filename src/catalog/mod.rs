//! Target catalog: the ordered list of organisms offered by the species control

mod target;

pub use target::{Availability, Target, TargetId};

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("target catalog is empty")]
    Empty,

    #[error("duplicate target id: {0}")]
    DuplicateId(String),

    #[error("target catalog has no selectable target")]
    NoSelectableTarget,
}

/// Ordered, validated list of targets with a designated default
///
/// Construction guarantees that `default_target()` names a selectable target,
/// so the selection cell can always be seeded with a valid id.
#[derive(Debug, Clone)]
pub struct TargetCatalog {
    targets: Vec<Target>,
    default: TargetId,
}

impl TargetCatalog {
    /// Build a catalog, falling back to the first selectable target when the
    /// requested default is unknown or disabled
    pub fn new(targets: Vec<Target>, default: Option<TargetId>) -> Result<Self, CatalogError> {
        if targets.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target.id.as_str()) {
                return Err(CatalogError::DuplicateId(target.id.to_string()));
            }
        }

        let first_selectable = targets
            .iter()
            .find(|t| t.is_selectable())
            .map(|t| t.id.clone())
            .ok_or(CatalogError::NoSelectableTarget)?;

        let default = match default {
            Some(id) => match targets.iter().find(|t| t.id == id) {
                Some(target) if target.is_selectable() => id,
                Some(_) => {
                    log::warn!(
                        "Default target {} is disabled, using {}",
                        id,
                        first_selectable
                    );
                    first_selectable
                }
                None => {
                    log::warn!(
                        "Default target {} is not in the catalog, using {}",
                        id,
                        first_selectable
                    );
                    first_selectable
                }
            },
            None => first_selectable,
        };

        Ok(Self { targets, default })
    }

    /// The organisms offered by cgMLST@Taiwan
    pub fn builtin() -> Self {
        Self {
            targets: builtin_targets(),
            default: TargetId::from("Vibrio_cholerae"),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Targets that can actually be chosen
    pub fn selectable(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.is_selectable())
    }

    pub fn default_target(&self) -> &TargetId {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for TargetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Species list in display order
pub fn builtin_targets() -> Vec<Target> {
    vec![
        Target::selectable("Vibrio_cholerae", "Vibrio cholerae"),
        Target::disabled("Campylobacter_jejuni", "Campylobacter jejuni"),
        Target::disabled("Listeria_monocytogenes", "Listeria monocytogenes"),
        Target::selectable("Salmonella_enterica", "Salmonella enterica"),
    ]
}

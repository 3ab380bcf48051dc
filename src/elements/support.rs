//! Support conditions

use serde::{Deserialize, Serialize};

/// Boundary restraints at a node.
///
/// Each flag restrains one of the planar degrees of freedom: translation in
/// global X, translation in global Y, and in-plane rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    /// Restrained in X translation
    #[serde(rename = "fixX", default)]
    pub fix_x: bool,
    /// Restrained in Y translation
    #[serde(rename = "fixY", default)]
    pub fix_y: bool,
    /// Restrained in rotation
    #[serde(rename = "fixR", default)]
    pub fix_r: bool,
}

impl Support {
    /// Create a support with no restraints
    pub fn free() -> Self {
        Self::default()
    }

    /// Create a fully fixed support (all three DOFs restrained)
    pub fn fixed() -> Self {
        Self {
            fix_x: true,
            fix_y: true,
            fix_r: true,
        }
    }

    /// Create a pinned support (translations restrained, rotation free)
    pub fn pinned() -> Self {
        Self {
            fix_x: true,
            fix_y: true,
            fix_r: false,
        }
    }

    /// Create a roller restraining Y translation only
    pub fn roller_y() -> Self {
        Self {
            fix_x: false,
            fix_y: true,
            fix_r: false,
        }
    }

    /// Create a roller restraining X translation only
    pub fn roller_x() -> Self {
        Self {
            fix_x: true,
            fix_y: false,
            fix_r: false,
        }
    }

    /// Restraint flags in DOF order [X, Y, rotation]
    pub fn restraints(&self) -> [bool; 3] {
        [self.fix_x, self.fix_y, self.fix_r]
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.fix_x || self.fix_y || self.fix_r
    }

    /// Count of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.restraints().iter().filter(|&&r| r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = Support::fixed();
        assert!(support.fix_x && support.fix_y && support.fix_r);
        assert_eq!(support.num_restrained(), 3);
    }

    #[test]
    fn test_pinned_support() {
        let support = Support::pinned();
        assert!(support.fix_x && support.fix_y);
        assert!(!support.fix_r);
        assert_eq!(support.num_restrained(), 2);
    }

    #[test]
    fn test_free_support() {
        assert!(!Support::free().is_supported());
    }
}

//! Physical description of one opening.

use serde::{Deserialize, Serialize};

use crate::units::Inches;

/// Immutable physical dimensions of one opening on an elevation.
///
/// A descriptor is built whole from form input or a stored record and is
/// never mutated in place; the layout solver receives it by reference and
/// recomputes derived geometry from scratch on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningDescriptor {
    /// Clear opening width.
    pub width: Inches,
    /// Clear opening height.
    pub height: Inches,
    /// Height of the sill line above the floor.
    pub sill_height: Inches,
    /// Horizontal offset of the opening along its elevation.
    pub start_position: Inches,
    /// Transom height when the opening carries a transom.
    pub transom_height: Option<Inches>,
}

impl OpeningDescriptor {
    /// Create a descriptor without a transom.
    #[must_use]
    pub const fn new(
        width: Inches,
        height: Inches,
        sill_height: Inches,
        start_position: Inches,
    ) -> Self {
        Self {
            width,
            height,
            sill_height,
            start_position,
            transom_height: None,
        }
    }

    /// Attach a transom of the given height.
    #[must_use]
    pub const fn with_transom(mut self, transom_height: Inches) -> Self {
        self.transom_height = Some(transom_height);
        self
    }

    /// Whether the opening carries a transom.
    #[must_use]
    pub const fn has_transom(&self) -> bool {
        self.transom_height.is_some()
    }
}

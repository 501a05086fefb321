//! Parametric grid definition for one opening.
//!
//! A [`GridDefinition`] describes how an opening is subdivided: column and
//! row counts, mullion width, the spacing strategy per axis, and the
//! catalog label each framing role maps to. Definitions are immutable
//! inputs to the solver; edits always build a fresh definition.

use std::collections::BTreeMap;

use glaze_core::Inches;
use serde::{Deserialize, Serialize};

/// Structural framing role within an opening.
///
/// The role is the identity used by the derivation rules; the catalog
/// label attached through [`ComponentNames`] is presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Bottom horizontal frame member.
    Sill,
    /// Top horizontal frame member.
    Head,
    /// Side vertical frame members (one per side).
    Jamb,
    /// Internal vertical mullion.
    Vertical,
    /// Internal horizontal mullion.
    Horizontal,
}

impl RoleKind {
    /// Every role, in derivation order.
    pub const ALL: [Self; 5] = [
        Self::Sill,
        Self::Head,
        Self::Jamb,
        Self::Vertical,
        Self::Horizontal,
    ];

    /// Default catalog label for the role.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Sill => "Sill",
            Self::Head => "Head",
            Self::Jamb => "Jamb",
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
        }
    }
}

/// How panel extents are distributed along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingStrategy {
    /// Even division of the opening extent.
    #[default]
    Equal,
    /// Caller-supplied extents. Declared in the data model but not yet
    /// implemented by the solver; requesting it fails loudly rather than
    /// silently behaving like [`SpacingStrategy::Equal`].
    Custom,
}

/// Spacing strategy per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridSpacing {
    /// Strategy for vertical mullion placement (divides the width).
    pub vertical: SpacingStrategy,
    /// Strategy for horizontal mullion placement (divides the height).
    pub horizontal: SpacingStrategy,
}

/// User-facing catalog label per framing role.
///
/// Labels key the quantity rollup, so two roles sharing one label merge
/// into a single line item (several structural roles cut from one
/// manufacturer part). Roles without an override fall back to
/// [`RoleKind::default_label`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentNames(BTreeMap<RoleKind, String>);

impl ComponentNames {
    /// Start from the default labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label for one role.
    #[must_use]
    pub fn with(mut self, role: RoleKind, label: impl Into<String>) -> Self {
        self.0.insert(role, label.into());
        self
    }

    /// Catalog label for a role, falling back to the default.
    #[must_use]
    pub fn label(&self, role: RoleKind) -> &str {
        self.0
            .get(&role)
            .map_or_else(|| role.default_label(), String::as_str)
    }
}

/// Parametric description of how one opening is subdivided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDefinition {
    /// Number of panel columns (1..=20).
    pub columns: u16,
    /// Number of panel rows (1..=20).
    pub rows: u16,
    /// Mullion face width, drawn as an overlay on the grid lines.
    pub mullion_width: Inches,
    /// Spacing strategy per axis.
    pub spacing: GridSpacing,
    /// Catalog label per framing role.
    pub components: ComponentNames,
}

impl Default for GridDefinition {
    /// The defaults applied when a form omits grid fields: a 2x2 grid
    /// with 2.5 in mullions, equal spacing, default labels.
    fn default() -> Self {
        Self {
            columns: 2,
            rows: 2,
            mullion_width: Inches::from_raw(25_000),
            spacing: GridSpacing::default(),
            components: ComponentNames::default(),
        }
    }
}

//! Aggregate constraint validation for descriptor + definition pairs.
//!
//! Validation collects every violated constraint in one pass so a form
//! can show the full set at once; it never stops at the first failure.
//! An empty issue list means the pair is safe to solve.

use std::fmt;

use glaze_core::{Inches, OpeningDescriptor};
use serde::{Deserialize, Serialize};

use crate::grid::GridDefinition;

/// Inclusive upper bound on grid columns and rows.
pub const MAX_GRID_DIVISIONS: u16 = 20;

/// Inclusive upper bound on mullion width.
pub const MAX_MULLION_WIDTH: Inches = Inches::from_whole(6);

/// One violated constraint, tagged with the offending field and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// `width` must be strictly positive.
    NonPositiveWidth { actual: Inches },
    /// `height` must be strictly positive.
    NonPositiveHeight { actual: Inches },
    /// `sill_height` may be zero but never negative.
    NegativeSillHeight { actual: Inches },
    /// `columns` outside `1..=20`.
    ColumnsOutOfRange { actual: u16 },
    /// `rows` outside `1..=20`.
    RowsOutOfRange { actual: u16 },
    /// `mullion_width` outside `(0, 6]` inches.
    MullionWidthOutOfRange { actual: Inches },
}

impl ValidationIssue {
    /// Identifier of the form field the issue belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveWidth { .. } => "width",
            Self::NonPositiveHeight { .. } => "height",
            Self::NegativeSillHeight { .. } => "sill_height",
            Self::ColumnsOutOfRange { .. } => "columns",
            Self::RowsOutOfRange { .. } => "rows",
            Self::MullionWidthOutOfRange { .. } => "mullion_width",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWidth { .. } => write!(f, "Width must be greater than 0"),
            Self::NonPositiveHeight { .. } => write!(f, "Height must be greater than 0"),
            Self::NegativeSillHeight { .. } => write!(f, "Sill height cannot be negative"),
            Self::ColumnsOutOfRange { .. } => write!(f, "Columns must be between 1 and 20"),
            Self::RowsOutOfRange { .. } => write!(f, "Rows must be between 1 and 20"),
            Self::MullionWidthOutOfRange { .. } => {
                write!(f, "Mullion width must be between 0 and 6 inches")
            }
        }
    }
}

impl std::error::Error for ValidationIssue {}

/// Check a descriptor + definition pair against every constraint.
///
/// Returns every violation found; an empty vec means valid. Callers must
/// refuse to solve a layout while any issue is outstanding (the solver
/// re-checks on its own as well).
#[must_use]
pub fn validate(descriptor: &OpeningDescriptor, definition: &GridDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !descriptor.width.is_positive() {
        issues.push(ValidationIssue::NonPositiveWidth {
            actual: descriptor.width,
        });
    }
    if !descriptor.height.is_positive() {
        issues.push(ValidationIssue::NonPositiveHeight {
            actual: descriptor.height,
        });
    }
    if descriptor.sill_height.is_negative() {
        issues.push(ValidationIssue::NegativeSillHeight {
            actual: descriptor.sill_height,
        });
    }
    if definition.columns < 1 || definition.columns > MAX_GRID_DIVISIONS {
        issues.push(ValidationIssue::ColumnsOutOfRange {
            actual: definition.columns,
        });
    }
    if definition.rows < 1 || definition.rows > MAX_GRID_DIVISIONS {
        issues.push(ValidationIssue::RowsOutOfRange {
            actual: definition.rows,
        });
    }
    if !definition.mullion_width.is_positive() || definition.mullion_width > MAX_MULLION_WIDTH {
        issues.push(ValidationIssue::MullionWidthOutOfRange {
            actual: definition.mullion_width,
        });
    }

    issues
}

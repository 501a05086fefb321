//! Grid layout solver.
//!
//! [`compute`] turns a descriptor + definition pair into the derived
//! [`GridLayout`]: mullion centerline offsets, panel cells, and the frame
//! perimeter. The layout is recomputed whole on every input change and is
//! never patched incrementally, so two calls with identical inputs always
//! produce structurally identical output.
//!
//! Coordinates are opening-local: origin at the lower-left corner of the
//! opening (the sill line), x rightward, y upward. Mullion width is an
//! overlay on the grid lines and does not reduce panel dimensions; the
//! preview renderer draws mullions centered on the offsets reported here.

use std::fmt;

use glaze_core::{Inches, OpeningDescriptor, SquareInches};
use serde::{Deserialize, Serialize};

use crate::grid::{GridDefinition, SpacingStrategy};
use crate::validate::{ValidationIssue, validate};

/// Axis of a spacing strategy, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Vertical mullions, dividing the opening width.
    Vertical,
    /// Horizontal mullions, dividing the opening height.
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Why a layout could not be solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// One or more input constraints are violated. Carries the complete
    /// set; nothing is partially computed against invalid input.
    Invalid(Vec<ValidationIssue>),
    /// The requested spacing strategy is declared but not implemented.
    /// Custom spacing must fail loudly, never quietly fall back to equal
    /// division.
    UnsupportedSpacing { axis: Axis },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(issues) => {
                write!(f, "invalid grid inputs: ")?;
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
            Self::UnsupportedSpacing { axis } => {
                write!(f, "custom {axis} spacing is not supported")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// One glass panel cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Column index, 0 at the left edge.
    pub column: u16,
    /// Row index, 0 at the sill.
    pub row: u16,
    /// Left edge offset from the opening's left edge.
    pub x: Inches,
    /// Bottom edge offset from the sill line.
    pub y: Inches,
    /// Panel width.
    pub width: Inches,
    /// Panel height.
    pub height: Inches,
}

impl Panel {
    /// Glass area of the panel.
    #[must_use]
    pub fn area(&self) -> SquareInches {
        self.width.area_with(self.height)
    }
}

/// Derived geometry for one opening, rebuilt wholesale from its inputs.
///
/// Invariants for any solved layout with `c` columns and `r` rows:
/// `vertical_mullions.len() == c - 1`, `horizontal_mullions.len() == r - 1`,
/// `panels.len() == c * r` (row-major from the sill), and panel extents
/// along any row or column sum exactly to the opening extent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Opening width the layout was solved for.
    pub width: Inches,
    /// Opening height the layout was solved for.
    pub height: Inches,
    /// Centerline x-offsets of internal vertical mullions, ascending.
    pub vertical_mullions: Vec<Inches>,
    /// Centerline y-offsets of internal horizontal mullions, ascending.
    pub horizontal_mullions: Vec<Inches>,
    /// Panel cells, row-major: row 0 (sill) left to right, then upward.
    pub panels: Vec<Panel>,
    /// Frame perimeter, `2 * (width + height)`.
    pub perimeter: Inches,
}

impl GridLayout {
    /// Number of panel columns the layout was solved for.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.vertical_mullions.len() as u16 + 1
    }

    /// Number of panel rows the layout was solved for.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.horizontal_mullions.len() as u16 + 1
    }

    /// Total glass area across all panels.
    #[must_use]
    pub fn glass_area(&self) -> SquareInches {
        self.panels.iter().map(Panel::area).sum()
    }
}

/// Solve the grid layout for a descriptor + definition pair.
///
/// Re-validates the inputs even when the caller already has; a non-empty
/// issue set aborts with the full aggregate. Only equal spacing is
/// implemented: a `Custom` strategy on either axis is rejected with
/// [`LayoutError::UnsupportedSpacing`].
pub fn compute(
    descriptor: &OpeningDescriptor,
    definition: &GridDefinition,
) -> Result<GridLayout, LayoutError> {
    let issues = validate(descriptor, definition);
    if !issues.is_empty() {
        return Err(LayoutError::Invalid(issues));
    }
    if definition.spacing.vertical == SpacingStrategy::Custom {
        return Err(LayoutError::UnsupportedSpacing {
            axis: Axis::Vertical,
        });
    }
    if definition.spacing.horizontal == SpacingStrategy::Custom {
        return Err(LayoutError::UnsupportedSpacing {
            axis: Axis::Horizontal,
        });
    }

    let columns = u32::from(definition.columns);
    let rows = u32::from(definition.rows);

    // Grid-line offsets per axis, endpoints included. Each offset is the
    // exact proportional division extent * i / n, so consecutive
    // differences telescope back to the full extent with no residue.
    let x_bounds = axis_bounds(descriptor.width, columns);
    let y_bounds = axis_bounds(descriptor.height, rows);

    let vertical_mullions = x_bounds[1..columns as usize].to_vec();
    let horizontal_mullions = y_bounds[1..rows as usize].to_vec();

    let mut panels = Vec::with_capacity((columns * rows) as usize);
    for row in 0..definition.rows {
        let y = y_bounds[row as usize];
        let height = y_bounds[row as usize + 1] - y;
        for column in 0..definition.columns {
            let x = x_bounds[column as usize];
            let width = x_bounds[column as usize + 1] - x;
            panels.push(Panel {
                column,
                row,
                x,
                y,
                width,
                height,
            });
        }
    }

    let layout = GridLayout {
        width: descriptor.width,
        height: descriptor.height,
        vertical_mullions,
        horizontal_mullions,
        panels,
        perimeter: (descriptor.width + descriptor.height).scale(2),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        columns = definition.columns,
        rows = definition.rows,
        panels = layout.panels.len(),
        "grid layout solved"
    );

    Ok(layout)
}

/// Grid-line offsets along one axis: `extent * i / n` for `i = 0..=n`.
fn axis_bounds(extent: Inches, divisions: u32) -> Vec<Inches> {
    (0..=divisions).map(|i| extent.mul_div(i, divisions)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpacing;
    use glaze_core::Inches;

    fn descriptor(width: i64, height: i64) -> OpeningDescriptor {
        OpeningDescriptor::new(
            Inches::from_whole(width),
            Inches::from_whole(height),
            Inches::ZERO,
            Inches::ZERO,
        )
    }

    fn definition(columns: u16, rows: u16) -> GridDefinition {
        GridDefinition {
            columns,
            rows,
            ..GridDefinition::default()
        }
    }

    #[test]
    fn three_by_two_reference_layout() {
        let layout = compute(&descriptor(10, 8), &definition(3, 2)).unwrap();

        assert_eq!(
            layout.vertical_mullions,
            [Inches::from_raw(33_333), Inches::from_raw(66_667)]
        );
        assert_eq!(layout.horizontal_mullions, [Inches::from_whole(4)]);
        assert_eq!(layout.panels.len(), 6);
        assert_eq!(layout.perimeter, Inches::from_whole(36));
    }

    #[test]
    fn single_lite_has_no_mullions() {
        let layout = compute(&descriptor(10, 8), &definition(1, 1)).unwrap();
        assert!(layout.vertical_mullions.is_empty());
        assert!(layout.horizontal_mullions.is_empty());
        assert_eq!(layout.panels.len(), 1);
        let panel = layout.panels[0];
        assert_eq!(panel.width, layout.width);
        assert_eq!(panel.height, layout.height);
    }

    #[test]
    fn panels_are_row_major_from_the_sill() {
        let layout = compute(&descriptor(10, 8), &definition(3, 2)).unwrap();
        let order: Vec<_> = layout.panels.iter().map(|p| (p.row, p.column)).collect();
        assert_eq!(order, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        // Row 0 sits on the sill line.
        assert_eq!(layout.panels[0].y, Inches::ZERO);
    }

    #[test]
    fn invalid_inputs_abort_with_full_aggregate() {
        let bad = GridDefinition {
            columns: 25,
            mullion_width: Inches::from_whole(7),
            ..GridDefinition::default()
        };
        let err = compute(&descriptor(10, 8), &bad).unwrap_err();
        match err {
            LayoutError::Invalid(issues) => {
                assert_eq!(issues.len(), 2);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn custom_spacing_is_rejected_not_downgraded() {
        let mut def = definition(3, 2);
        def.spacing = GridSpacing {
            vertical: SpacingStrategy::Custom,
            horizontal: SpacingStrategy::Equal,
        };
        let err = compute(&descriptor(10, 8), &def).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsupportedSpacing {
                axis: Axis::Vertical
            }
        );
        assert_eq!(err.to_string(), "custom vertical spacing is not supported");
    }

    #[test]
    fn validation_outranks_spacing_check() {
        // Both problems present: the aggregate validation error wins so
        // the form sees every field issue before the strategy complaint.
        let mut def = definition(0, 2);
        def.spacing.horizontal = SpacingStrategy::Custom;
        let err = compute(&descriptor(10, 8), &def).unwrap_err();
        assert!(matches!(err, LayoutError::Invalid(_)));
    }
}

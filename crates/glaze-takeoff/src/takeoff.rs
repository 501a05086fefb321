//! Component quantity rollup from a solved layout.
//!
//! [`aggregate`] turns geometry into the quantity payload priced by the
//! costing/catalog collaborator: linear footage and counts per catalog
//! label for framing, panel count and glass area separately for glazing.
//! Glass is not a framing role; it never appears in the component map.

use std::collections::BTreeMap;

use glaze_core::{Inches, OpeningDescriptor, SquareInches};
use serde::{Deserialize, Serialize};

use crate::grid::{ComponentNames, GridDefinition, RoleKind};
use crate::layout::{GridLayout, LayoutError, compute};

/// Aggregated material quantity for one catalog label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantityBreakdown {
    /// Number of runs cut to this label.
    pub count: u32,
    /// Summed length across all runs.
    pub total_length: Inches,
}

impl QuantityBreakdown {
    /// Fold in `count` runs of `length` each.
    fn add_runs(&mut self, count: u32, length: Inches) {
        self.count += count;
        self.total_length += length.scale(i64::from(count));
    }
}

/// Glazing quantities, reported separately from framing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlassTakeoff {
    /// Number of glass panels.
    pub panel_count: u32,
    /// Total glass area across all panels.
    pub total_area: SquareInches,
}

/// The full quantity payload for one opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeoffSummary {
    /// Framing quantities keyed by catalog label. Roles sharing a label
    /// merge into one entry; roles with zero runs contribute nothing.
    pub components: BTreeMap<String, QuantityBreakdown>,
    /// Glazing quantities.
    pub glass: GlassTakeoff,
}

/// Roll a solved layout up into quantities keyed by catalog label.
///
/// Derivation per role: sill and head each run the full width once;
/// jambs run the height twice; each internal vertical mullion runs the
/// height and each internal horizontal mullion runs the width. The map
/// key is the user-supplied label, so mapping several roles onto one
/// manufacturer part sums their runs under that part.
#[must_use]
pub fn aggregate(layout: &GridLayout, names: &ComponentNames) -> TakeoffSummary {
    let verticals = u32::from(layout.columns()) - 1;
    let horizontals = u32::from(layout.rows()) - 1;

    let mut components: BTreeMap<String, QuantityBreakdown> = BTreeMap::new();
    let mut add = |role: RoleKind, count: u32, length: Inches| {
        if count == 0 {
            return;
        }
        components
            .entry(names.label(role).to_owned())
            .or_default()
            .add_runs(count, length);
    };

    add(RoleKind::Sill, 1, layout.width);
    add(RoleKind::Head, 1, layout.width);
    add(RoleKind::Jamb, 2, layout.height);
    add(RoleKind::Vertical, verticals, layout.height);
    add(RoleKind::Horizontal, horizontals, layout.width);

    let summary = TakeoffSummary {
        components,
        glass: GlassTakeoff {
            panel_count: layout.panels.len() as u32,
            total_area: layout.glass_area(),
        },
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        component_labels = summary.components.len(),
        panel_count = summary.glass.panel_count,
        "takeoff aggregated"
    );

    summary
}

/// Solve and aggregate in one step.
///
/// This is the pipeline the owning record service runs on opening
/// creation, on every dimension or grid edit, and on an explicit
/// regenerate request. It is pure and idempotent: re-running it after a
/// persistence failure is always safe.
pub fn take_off(
    descriptor: &OpeningDescriptor,
    definition: &GridDefinition,
) -> Result<(GridLayout, TakeoffSummary), LayoutError> {
    let layout = compute(descriptor, definition)?;
    let summary = aggregate(&layout, &definition.components);
    Ok((layout, summary))
}

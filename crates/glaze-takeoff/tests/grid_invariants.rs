//! Property-style invariants for the grid solver and takeoff rollup.
//!
//! This suite drives the public API across the full valid input domain
//! and asserts the structural guarantees the preview renderer and the
//! costing collaborator rely on: element counts, exact extent sums,
//! perimeter, and deterministic recomputation.

use glaze_takeoff::{
    GridDefinition, Inches, OpeningDescriptor, RoleKind, ValidationIssue, aggregate, compute,
    take_off, validate,
};
use proptest::prelude::*;

fn descriptor(width_raw: i64, height_raw: i64) -> OpeningDescriptor {
    OpeningDescriptor::new(
        Inches::from_raw(width_raw),
        Inches::from_raw(height_raw),
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

/// Opening extents from a fraction of an inch up to 400 in (~33 ft).
fn extent_raw() -> impl Strategy<Value = i64> {
    1i64..=4_000_000
}

proptest! {
    #[test]
    fn element_counts_match_grid(
        width in extent_raw(),
        height in extent_raw(),
        columns in 1u16..=20,
        rows in 1u16..=20,
    ) {
        let layout = compute(&descriptor(width, height), &definition(columns, rows)).unwrap();

        prop_assert_eq!(layout.vertical_mullions.len(), usize::from(columns) - 1);
        prop_assert_eq!(layout.horizontal_mullions.len(), usize::from(rows) - 1);
        prop_assert_eq!(layout.panels.len(), usize::from(columns) * usize::from(rows));
        prop_assert_eq!(layout.columns(), columns);
        prop_assert_eq!(layout.rows(), rows);
    }

    #[test]
    fn perimeter_is_twice_width_plus_height(
        width in extent_raw(),
        height in extent_raw(),
        columns in 1u16..=20,
        rows in 1u16..=20,
    ) {
        let layout = compute(&descriptor(width, height), &definition(columns, rows)).unwrap();
        prop_assert_eq!(layout.perimeter.raw(), 2 * (width + height));
    }

    #[test]
    fn panel_extents_sum_exactly(
        width in extent_raw(),
        height in extent_raw(),
        columns in 1u16..=20,
        rows in 1u16..=20,
    ) {
        let layout = compute(&descriptor(width, height), &definition(columns, rows)).unwrap();

        for row in 0..rows {
            let row_width: Inches = layout
                .panels
                .iter()
                .filter(|p| p.row == row)
                .map(|p| p.width)
                .sum();
            prop_assert_eq!(row_width, layout.width);
        }
        for column in 0..columns {
            let column_height: Inches = layout
                .panels
                .iter()
                .filter(|p| p.column == column)
                .map(|p| p.height)
                .sum();
            prop_assert_eq!(column_height, layout.height);
        }
    }

    #[test]
    fn mullion_offsets_are_interior_and_ascending(
        // At least one inch of extent so rounding cannot collapse two
        // grid lines onto the same raw offset.
        width in 10_000i64..=4_000_000,
        height in 10_000i64..=4_000_000,
        columns in 2u16..=20,
        rows in 2u16..=20,
    ) {
        let layout = compute(&descriptor(width, height), &definition(columns, rows)).unwrap();

        let mut previous = Inches::ZERO;
        for &x in &layout.vertical_mullions {
            prop_assert!(x > previous);
            prop_assert!(x < layout.width);
            previous = x;
        }
        let mut previous = Inches::ZERO;
        for &y in &layout.horizontal_mullions {
            prop_assert!(y > previous);
            prop_assert!(y < layout.height);
            previous = y;
        }
    }

    #[test]
    fn recomputation_is_deterministic(
        width in extent_raw(),
        height in extent_raw(),
        columns in 1u16..=20,
        rows in 1u16..=20,
    ) {
        let d = descriptor(width, height);
        let g = definition(columns, rows);

        let first = compute(&d, &g).unwrap();
        let second = compute(&d, &g).unwrap();
        prop_assert_eq!(&first, &second);

        let rollup_a = aggregate(&first, &g.components);
        let rollup_b = aggregate(&second, &g.components);
        prop_assert_eq!(rollup_a, rollup_b);
    }

    #[test]
    fn rollup_totals_follow_the_grid(
        width in extent_raw(),
        height in extent_raw(),
        columns in 1u16..=20,
        rows in 1u16..=20,
    ) {
        let (layout, summary) =
            take_off(&descriptor(width, height), &definition(columns, rows)).unwrap();

        let jamb = &summary.components[RoleKind::Jamb.default_label()];
        prop_assert_eq!(jamb.count, 2);
        prop_assert_eq!(jamb.total_length, layout.height.scale(2));

        if columns > 1 {
            let vertical = &summary.components[RoleKind::Vertical.default_label()];
            prop_assert_eq!(vertical.count, u32::from(columns) - 1);
            prop_assert_eq!(
                vertical.total_length,
                layout.height.scale(i64::from(columns) - 1)
            );
        } else {
            prop_assert!(
                !summary
                    .components
                    .contains_key(RoleKind::Vertical.default_label())
            );
        }

        prop_assert_eq!(
            summary.glass.panel_count,
            u32::from(columns) * u32::from(rows)
        );
    }

    #[test]
    fn out_of_range_divisions_are_flagged(
        columns in 21u16..=500,
        rows in 21u16..=500,
    ) {
        let issues = validate(&descriptor(1_000_000, 800_000), &definition(columns, rows));
        prop_assert!(
            issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::ColumnsOutOfRange { .. })),
            "expected a ColumnsOutOfRange issue"
        );
        prop_assert!(
            issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::RowsOutOfRange { .. })),
            "expected a RowsOutOfRange issue"
        );
    }
}

#![forbid(unsafe_code)]

//! Grid layout solving and material takeoff for glazing openings.
//!
//! Given an opening's physical dimensions ([`OpeningDescriptor`]) and a
//! parametric mullion grid ([`GridDefinition`]), this crate derives the
//! mullion/panel geometry ([`GridLayout`]) and the per-component material
//! quantities ([`TakeoffSummary`]) used for cost rollups and the on-screen
//! elevation preview.
//!
//! All entry points are pure, synchronous functions over immutable inputs:
//!
//! - [`validate`] — aggregate constraint checking, never fail-fast.
//! - [`compute`] — geometry solve; re-validates defensively.
//! - [`aggregate`] — quantities keyed by catalog label.
//! - [`take_off`] — the compute-then-aggregate pipeline, idempotent and
//!   freely retryable; hosts call it on opening create, edit, and explicit
//!   grid regeneration.
//!
//! The crate holds no state between calls, performs no I/O, and is safe to
//! invoke concurrently from any number of threads. Persistence of the
//! derived layout and quantities belongs to the owning record service.

pub mod grid;
pub mod layout;
pub mod takeoff;
pub mod validate;

pub use glaze_core::{Inches, OpeningDescriptor, SquareInches};
pub use grid::{ComponentNames, GridDefinition, GridSpacing, RoleKind, SpacingStrategy};
pub use layout::{Axis, GridLayout, LayoutError, Panel, compute};
pub use takeoff::{GlassTakeoff, QuantityBreakdown, TakeoffSummary, aggregate, take_off};
pub use validate::{ValidationIssue, validate};

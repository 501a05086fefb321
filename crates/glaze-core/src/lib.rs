#![forbid(unsafe_code)]

//! Foundational value types for glazing takeoff.
//!
//! This crate holds the primitives shared by the layout solver and any
//! host integration: exact fixed-point length/area units and the
//! immutable physical description of one opening. It carries no solver
//! logic and performs no I/O.

pub mod opening;
pub mod units;

pub use opening::OpeningDescriptor;
pub use units::{Inches, SquareInches};

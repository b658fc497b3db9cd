//! Automatic placement of rectangular panels in a window.
//!
//! Given a set of panels, each with a required aspect ratio and a relative
//! area weight, compute non-overlapping integer-pixel placements that fill
//! a single window with little waste while mildly preferring the caller's
//! input order. A deterministic greedy staircase placer evaluates candidate
//! placement orders; a seeded local search explores transpositions of that
//! order. Same inputs and seed, same layout — always.
//!
//! Pure geometry — no I/O, `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`panel`] — panel and window value types, validation, output rects
//! - [`order`] — placement orders: panel references and row-break markers
//! - [`staircase`] — layout evaluation along a monotone corner list
//! - [`search`] — seeded threshold-accepting local search
//! - [`project`] — scaling and flipping into caller pixel coordinates
//! - [`place`] — end-to-end pipeline behind a builder

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod order;
pub mod panel;
pub mod place;
pub mod project;
pub mod search;
pub mod staircase;

// Re-exports: core types and entry points
pub use order::{OrderSequence, Slot};
pub use panel::{MAX_PANELS, Panel, PanelSpec, PlaceError, Rect, Window};
pub use place::{Placement, place};
pub use project::project;
pub use search::Optimizer;

//! Persistent drawing style: fill color, stroke color, stroke weight.
//!
//! There is no per-shape snapshot. Every shape reads the style at the moment it is
//! drawn, so changing it mid-`draw` only affects shapes drawn afterwards.

mod state;

pub use state::StyleState;

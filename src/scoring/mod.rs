//! Scoring: the points counter, the move counter, and the delta table.
//!
//! ## Key Types
//!
//! - `Points`: integer score, floor-clamped at zero on `add`
//! - `MoveCounter`: number of executed commands and undos
//! - `PointsTable`: fixed score deltas keyed by move kind

mod counters;
mod table;

pub use counters::{MoveCounter, Points};
pub use table::PointsTable;

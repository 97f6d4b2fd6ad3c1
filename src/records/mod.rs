//! Score records and the persistence boundary.
//!
//! ## Key Types
//!
//! - `ScoreRecord`: points and timestamp of a finished match
//! - `Leaderboard`: the top 9 records
//! - `Storage`: key/value byte store supplied by the caller
//! - `Clock`: timestamp source supplied by the caller
//!
//! The engine never touches a file system or wall clock directly; both sit
//! behind traits so callers choose the medium and tests stay deterministic.

mod clock;
mod leaderboard;
mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use leaderboard::{Leaderboard, ScoreRecord};
pub use storage::{MemoryStorage, Storage};

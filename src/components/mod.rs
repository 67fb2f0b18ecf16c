//! UI Components
//!
//! Reusable Leptos components for the scoreboard.

pub mod gauges;
pub mod guard;
pub mod log_table;
pub mod scoreboard;

pub use gauges::HouseGauges;
pub use guard::RequireAuth;
pub use log_table::PointLog;
pub use scoreboard::ScoreBoard;

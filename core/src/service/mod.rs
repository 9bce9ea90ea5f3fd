pub mod aggregate;
pub mod grid;

pub use aggregate::{by_week, summarize};
pub use grid::{build_grid, weeks_of};

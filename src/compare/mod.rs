//! Side-by-side comparison of the exact solver and the ant colony.
//!
//! - [`Algorithm`]: dispatch over both solvers with a common [`Solution`](crate::Solution)
//! - [`measure`] / [`timing_table`]: wall-clock timings over growing random instances
//! - [`ParameterGrid`]: grid search over colony parameters, scored against
//!   the exact optimum
//!
//! With the `csv` feature, tables can be exported through the `csv` crate.

mod algorithm;
#[cfg(feature = "csv")]
mod report;
mod sweep;
mod timing;

pub use algorithm::{ant_colony_solve, exact_solve, Algorithm, Params};
#[cfg(feature = "csv")]
pub use report::{write_sweep_csv, write_timing_csv};
pub use sweep::{ParameterGrid, SweepRow};
pub use timing::{measure, timing_table, TimingRow};

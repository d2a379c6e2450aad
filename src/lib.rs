//! Critic score vs global sales: load game rows, correlate the two columns,
//! report the statistics and draw a scatter plot.

pub mod data;
pub mod error;
pub mod processing;
pub mod render;
pub mod report;

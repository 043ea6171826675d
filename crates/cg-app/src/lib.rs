//! Command line, interactive menu, and strategy runner for chromagrid.

pub mod cli;
pub mod menu;
pub mod pipeline;

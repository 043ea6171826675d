/// Grid layout and PNG output for chromagrid.

pub mod layout;
pub mod png;

pub use layout::GridLayout;
pub use png::{output_path, render, write_png};

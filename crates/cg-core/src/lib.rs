/// Shared types, claim table, and configuration for chromagrid.
///
/// This crate contains the color model and the data shared by the
/// generators, the clustering pipeline, and the renderer.

pub mod claim;
pub mod cluster;
pub mod collection;
pub mod color;
pub mod config;
pub mod depth;
pub mod error;
pub mod traits;

pub use claim::ClaimTable;
pub use cluster::Cluster;
pub use collection::ColorCollection;
pub use color::Color;
pub use config::{ClaimMode, GeneratorConfig, Strategy};
pub use depth::BitDepth;
pub use error::CoreError;

//! voxel_topology - Boundary surfel extraction over Khalimsky spaces
//!
//! This crate traces the boundary of a digital object (a set of voxels given
//! by a point predicate) as oriented surfels in a cellular grid, grouping
//! them into connected components under a configurable surfel adjacency.
//!
//! # Features
//!
//! - **Khalimsky cells**: Signed cells with doubled integer coordinates,
//!   dimension-generic through const generics
//! - **Surfel tracking**: Interior or exterior adjacency per pair of axes,
//!   deterministic breadth-first tracking from the first unvisited bel
//! - **Chain ordering**: Components reordered so consecutive surfels share
//!   an edge, by rotation-extension with seeded restarts
//! - **Predicates**: Image thresholds, bit-packed digital sets, closures
//! - **Export**: Quad meshes in OFF format with per-component colours
//!
//! # Example
//!
//! ```ignore
//! use voxel_topology::{extract_all_connected_surfels, KhalimskySpace, SurfelAdjacency};
//!
//! let space = KhalimskySpace::new([-1, -1, -1], [1, 1, 1], true)?;
//! let object = |p: &[i32; 3]| *p == [0, 0, 0];
//! let components = extract_all_connected_surfels(&space, &SurfelAdjacency::interior(), &object)?;
//!
//! assert_eq!(components.count(), 1);
//! assert_eq!(components.total_surfel_count(), 6);
//! ```

pub mod adjacency;
pub mod components;
pub mod config;
pub mod constants;
pub mod digital_set;
pub mod error;
pub mod export;
pub mod image;
pub mod metrics;
pub mod predicate;
pub mod scan;
pub mod space;
pub mod tracer;
pub mod types;

// Re-export commonly used items
pub use adjacency::{Adjacency, SurfelAdjacency};
pub use components::{SurfelComponent, SurfelComponents};
pub use config::ExtractionConfig;
pub use digital_set::DigitalSet;
pub use error::TopologyError;
pub use image::{Domain, Image, VoxelImage};
pub use metrics::ExtractionMetrics;
pub use predicate::{ImageThreshold, IntervalThreshold, PointPredicate, SetPredicate};
pub use space::{KSpace3, KhalimskySpace};
pub use tracer::{
  extract_all_connected_surfels, extract_image, CancelToken, ExtractionOutput, Extractor,
};
pub use types::{Cell, Point, Point3, SignedCell};

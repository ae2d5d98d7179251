//! Mesh export of traced components.
//!
//! Surfels become quads whose vertices are the pointels bounding them,
//! shared between neighbouring quads. Voxel `p` is centred at world
//! position `p`, so a Khalimsky coordinate `k` maps to `(k - 1) / 2`.

pub mod color;
pub mod mesh;

pub use color::{Color, GradientColorMap};
pub use mesh::{OffError, SurfelMesh};

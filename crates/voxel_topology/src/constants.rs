//! Defaults shared by the library and the `extract3d` front end.
//!
//! # Khalimsky coordinates
//!
//! ```text
//!  digital point p:      p-1        p         p+1
//!                         │         │          │
//!  Khalimsky k:   ... 2p-2  2p-1  2p  2p+1  2p+2  2p+3 ...
//!                    ptl   spel  ptl  spel   ptl   spel
//!
//!  even k → grid point plane (closed cell boundary)
//!  odd  k → grid interval (open cell interior)
//! ```
//!
//! A voxel `p` lives at `2p + 1` on every axis. A surfel has exactly one even
//! coordinate (its orthogonal axis); its two incident voxels are one step
//! below and above on that axis.
//!
//! # Padding
//!
//! ```text
//!  image domain        [lo ............. hi]
//!  padded domain    [lo-1 ................. hi+1]
//!  closed K-range  2(lo-1) ........... 2(hi+1)+2
//! ```
//!
//! Padding by one voxel guarantees every object voxel has an outside
//! neighbour inside the space, so border-touching objects close.

/// Default lower threshold of the `extract3d` front end.
pub const DEFAULT_THRESHOLD_MIN: i32 = 128;

/// Default upper threshold of the `extract3d` front end.
pub const DEFAULT_THRESHOLD_MAX: i32 = 255;

/// Default domain padding, in voxels, applied on every side of every axis.
pub const DEFAULT_PADDING: u32 = 1;

/// Work granted per surfel to the first attempt at ordering a component as
/// an edge-connected chain. One unit is an extension, a rotated path entry
/// or a surfel visited while measuring distances.
pub const CHAIN_WORK_PER_SURFEL: usize = 512;

/// Flat work allowance added to the first chain attempt.
pub const CHAIN_BASE_WORK: usize = 1 << 16;

/// Chain attempts per component before it keeps its traversal order.
pub const CHAIN_ATTEMPTS: usize = 8;

/// Largest absolute digital coordinate of a domain or space. Khalimsky
/// coordinates two steps past the closed bounds still fit in an `i32`.
pub const MAX_DIGITAL_COORD: i32 = i32::MAX / 2 - 2;

/// Khalimsky coordinate of the voxel at digital coordinate `p`.
#[inline(always)]
pub const fn spel_kcoord(p: i32) -> i32 {
  2 * p + 1
}

/// Digital coordinate of a Khalimsky coordinate (floor of `k / 2`).
#[inline(always)]
pub const fn digital_coord(k: i32) -> i32 {
  k >> 1
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;

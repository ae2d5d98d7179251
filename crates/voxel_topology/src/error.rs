//! Error taxonomy for space construction, image building and extraction.

use thiserror::Error;

/// Errors reported by `voxel_topology`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
  /// A coordinate range is empty or not representable on some axis.
  #[error("invalid bounds on axis {axis}: [{lower}, {upper}]")]
  InvalidBounds {
    /// Offending axis.
    axis: usize,
    /// Lower bound on that axis.
    lower: i32,
    /// Upper bound on that axis.
    upper: i32,
  },

  /// The predicate produced no boundary surfel at all.
  ///
  /// Only returned by [`crate::SurfelComponents::require_non_empty`];
  /// extraction itself reports an empty object as zero components.
  #[error("predicate selects no boundary surfel")]
  EmptyPredicate,

  /// Image sample buffer does not match its domain.
  #[error("size mismatch: expected {expected} samples, got {actual}")]
  SizeMismatch {
    /// Number of points in the domain.
    expected: usize,
    /// Number of samples supplied.
    actual: usize,
  },

  /// Extraction was cancelled through its [`crate::CancelToken`].
  #[error("extraction cancelled")]
  Cancelled,
}

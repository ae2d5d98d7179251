//! Axis-aligned lattice iteration shared by domains and Khalimsky scans.

/// Iterates an N-dimensional box of integer coordinates with a per-axis
/// stride, axis 0 varying fastest.
#[derive(Clone, Debug)]
pub struct LatticeIter<const N: usize> {
  start: [i32; N],
  end: [i32; N],
  step: [i32; N],
  next: Option<[i32; N]>,
}

impl<const N: usize> LatticeIter<N> {
  /// Box `[start, end]` (inclusive) walked with `step` on every axis.
  ///
  /// Empty when `start > end` on any axis.
  pub fn new(start: [i32; N], end: [i32; N], step: [i32; N]) -> Self {
    debug_assert!(step.iter().all(|&s| s > 0), "lattice steps must be positive");
    let empty = (0..N).any(|i| start[i] > end[i]);
    Self {
      start,
      end,
      step,
      next: if empty { None } else { Some(start) },
    }
  }

  /// Number of lattice points left, assuming a fresh iterator.
  pub fn volume(&self) -> usize {
    if self.next.is_none() {
      return 0;
    }
    (0..N)
      .map(|i| ((self.end[i] - self.start[i]) / self.step[i] + 1) as usize)
      .product()
  }
}

impl<const N: usize> Iterator for LatticeIter<N> {
  type Item = [i32; N];

  fn next(&mut self) -> Option<[i32; N]> {
    let current = self.next?;
    let mut advanced = current;
    let mut axis = 0;
    loop {
      if axis == N {
        self.next = None;
        break;
      }
      advanced[axis] += self.step[axis];
      if advanced[axis] <= self.end[axis] {
        self.next = Some(advanced);
        break;
      }
      advanced[axis] = self.start[axis];
      axis += 1;
    }
    Some(current)
  }
}

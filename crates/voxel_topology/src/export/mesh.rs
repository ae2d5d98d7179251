//! Quad mesh built from oriented surfels, written as OFF.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use super::color::{Color, GradientColorMap};
use crate::components::SurfelComponents;
use crate::types::{Point3, SignedCell};

/// Error type for OFF output.
#[derive(Debug, Error)]
pub enum OffError {
  #[error("OFF I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// One coloured quad, vertices counter-clockwise seen from outside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
  pub indices: [u32; 4],
  pub color: Color,
}

/// Quad mesh with pointels shared between faces.
#[derive(Clone, Debug, Default)]
pub struct SurfelMesh {
  vertices: Vec<Vec3>,
  faces: Vec<Quad>,
  /// Pointel Khalimsky coordinates to vertex index.
  lookup: HashMap<[i32; 3], u32>,
}

/// World position of a Khalimsky coordinate.
#[inline]
fn world(kcoord: i32) -> f32 {
  (kcoord - 1) as f32 * 0.5
}

impl SurfelMesh {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn vertices(&self) -> &[Vec3] {
    &self.vertices
  }

  pub fn faces(&self) -> &[Quad] {
    &self.faces
  }

  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }

  /// Axis-aligned bounds of all vertices, `None` for an empty mesh.
  pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
    let first = *self.vertices.first()?;
    Some(
      self
        .vertices
        .iter()
        .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
  }

  fn vertex(&mut self, pointel: [i32; 3]) -> u32 {
    if let Some(&index) = self.lookup.get(&pointel) {
      return index;
    }
    let index = self.vertices.len() as u32;
    self
      .vertices
      .push(Vec3::new(world(pointel[0]), world(pointel[1]), world(pointel[2])));
    self.lookup.insert(pointel, index);
    index
  }

  /// Add the quad of a signed surfel, facing away from its interior voxel.
  pub fn add_surfel(&mut self, surfel: &SignedCell<3>, color: Color) {
    let c = surfel.kcoords();
    let Some(k) = (0..3).find(|&axis| c[axis] % 2 == 0) else {
      return;
    };
    let (i, j) = ((k + 1) % 3, (k + 2) % 3);

    // Counter-clockwise around +k.
    let mut corners = [(-1, -1), (1, -1), (1, 1), (-1, 1)];
    if surfel.is_positive() {
      corners.reverse();
    }

    let mut indices = [0u32; 4];
    for (slot, (di, dj)) in indices.iter_mut().zip(corners) {
      let mut pointel = c;
      pointel[i] += di;
      pointel[j] += dj;
      *slot = self.vertex(pointel);
    }
    self.faces.push(Quad { indices, color });
  }

  /// Add the six outward faces of voxel `point`.
  pub fn add_voxel(&mut self, point: &Point3, color: Color) {
    let spel = point.map(|p| 2 * p + 1);
    for axis in 0..3 {
      for delta in [-1, 1] {
        let mut kcoords = spel;
        kcoords[axis] += delta;
        // The voxel is the upper neighbour of its lower face.
        self.add_surfel(&SignedCell::new(kcoords, delta < 0), color);
      }
    }
  }

  /// Add every component, component `i` coloured with `gradient.color(i)`.
  pub fn add_components(&mut self, components: &SurfelComponents<3>, gradient: &GradientColorMap) {
    for (index, component) in components.iter().enumerate() {
      let color = gradient.color(index as f64);
      for surfel in component.iter() {
        self.add_surfel(surfel, color);
      }
    }
  }

  /// Write the mesh as OFF with per-face RGBA colours in `[0, 1]`.
  pub fn write_off<W: Write>(&self, writer: W) -> Result<(), OffError> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "OFF")?;
    writeln!(out, "# generated by voxel_topology")?;
    writeln!(out, "{} {} 0", self.vertices.len(), self.faces.len())?;
    for v in &self.vertices {
      writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }
    for face in &self.faces {
      let [a, b, c, d] = face.indices;
      let [r, g, bl, al] = face.color.to_unit();
      writeln!(out, "4 {} {} {} {} {:.3} {:.3} {:.3} {:.3}", a, b, c, d, r, g, bl, al)?;
    }
    out.flush()?;
    Ok(())
  }

  /// Write the mesh to an OFF file at `path`.
  pub fn save_off(&self, path: impl AsRef<Path>) -> Result<(), OffError> {
    self.write_off(File::create(path)?)
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

//! Reader for `.vol` volume files.
//!
//! Layout: ASCII `Key: value` header lines, a line holding a single `.`, then
//! `X * Y * Z` unsigned bytes with x varying fastest, then y, then z.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;
use voxel_topology::{Domain, Image, TopologyError, VoxelImage};

/// Error type for volume loading.
#[derive(Debug, Error)]
pub enum VolError {
	#[error("vol I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("vol header is not terminated by a '.' line")]
	UnterminatedHeader,

	#[error("malformed vol header line: {0:?}")]
	MalformedHeader(String),

	#[error("vol header is missing key {0}")]
	MissingKey(&'static str),

	#[error("invalid vol dimension {key}: {value:?}")]
	InvalidDimension { key: String, value: String },

	#[error("vol data truncated: expected {expected} bytes, found {actual}")]
	Truncated { expected: usize, actual: usize },

	#[error(transparent)]
	Domain(#[from] TopologyError),
}

/// Parse a volume from any buffered reader.
pub fn read_vol<R: BufRead>(mut reader: R) -> Result<VoxelImage, VolError> {
	let mut extent: [Option<usize>; 3] = [None; 3];
	let mut line = Vec::new();

	loop {
		line.clear();
		if reader.read_until(b'\n', &mut line)? == 0 {
			return Err(VolError::UnterminatedHeader);
		}
		let text = String::from_utf8_lossy(&line);
		let text = text.trim();
		if text == "." {
			break;
		}
		if text.is_empty() {
			continue;
		}

		let (key, value) = text
			.split_once(':')
			.ok_or_else(|| VolError::MalformedHeader(text.to_string()))?;
		let (key, value) = (key.trim(), value.trim());
		let axis = match key {
			"X" => 0,
			"Y" => 1,
			"Z" => 2,
			// Voxel-Size, Alpha-Color, Version, ...
			_ => continue,
		};
		let size = value
			.parse::<usize>()
			.map_err(|_| VolError::InvalidDimension {
				key: key.to_string(),
				value: value.to_string(),
			})?;
		extent[axis] = Some(size);
	}

	let x = extent[0].ok_or(VolError::MissingKey("X"))?;
	let y = extent[1].ok_or(VolError::MissingKey("Y"))?;
	let z = extent[2].ok_or(VolError::MissingKey("Z"))?;
	let expected = x
		.checked_mul(y)
		.and_then(|xy| xy.checked_mul(z))
		.ok_or_else(|| VolError::InvalidDimension {
			key: "X*Y*Z".to_string(),
			value: format!("{x}*{y}*{z}"),
		})?;
	let domain = Domain::from_extent([x, y, z])?;

	// Sized by the bytes actually read, not by the header.
	let mut data = Vec::new();
	reader.take(expected as u64).read_to_end(&mut data)?;
	if data.len() < expected {
		return Err(VolError::Truncated {
			expected,
			actual: data.len(),
		});
	}

	let values = data.into_iter().map(i32::from).collect();
	Ok(Image::new(domain, values)?)
}

/// Load a volume from disk.
pub fn load_vol(path: &Path) -> Result<VoxelImage, VolError> {
	read_vol(BufReader::new(File::open(path)?))
}

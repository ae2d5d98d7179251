//! Optional TOML configuration for extraction runs.
//!
//! Every field may be omitted; command-line flags take precedence over the
//! file, and the file over built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use voxel_topology::constants::{DEFAULT_PADDING, DEFAULT_THRESHOLD_MAX, DEFAULT_THRESHOLD_MIN};

/// Root configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Input `.vol` file.
	pub image: Option<PathBuf>,
	/// Surfel mesh output.
	pub output: Option<PathBuf>,
	/// Source voxel mesh output.
	pub export_src: Option<PathBuf>,
	/// Inclusive `[min, max]` sample range of the object.
	pub threshold: Option<[i32; 2]>,
	/// 0 for interior surfel adjacency, 1 for exterior.
	pub badj: Option<i32>,
	/// Voxels of padding around the volume.
	pub padding: Option<u32>,
	/// Use an open Khalimsky space.
	#[serde(default)]
	pub open: bool,
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub image: PathBuf,
	pub output: PathBuf,
	pub export_src: PathBuf,
	pub threshold: [i32; 2],
	pub badj: i32,
	pub padding: u32,
	pub open: bool,
}

/// Values given on the command line, `None` when not passed.
#[derive(Debug, Default)]
pub struct Overrides {
	pub image: Option<PathBuf>,
	pub output: Option<PathBuf>,
	pub export_src: Option<PathBuf>,
	pub threshold: Option<[i32; 2]>,
	pub badj: Option<i32>,
	pub padding: Option<u32>,
	pub open: bool,
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		if let Some(badj) = config.badj {
			validate_badj(badj)?;
		}
		if let Some(threshold) = config.threshold {
			validate_threshold(threshold)?;
		}
		Ok(config)
	}

	/// Merge command-line overrides over this file and the defaults.
	pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
		let Some(image) = overrides.image.or(self.image) else {
			anyhow::bail!("No input volume: pass --image or set `image` in the config");
		};
		let settings = Settings {
			image,
			output: overrides
				.output
				.or(self.output)
				.unwrap_or_else(|| PathBuf::from("output.off")),
			export_src: overrides
				.export_src
				.or(self.export_src)
				.unwrap_or_else(|| PathBuf::from("src.off")),
			threshold: overrides
				.threshold
				.or(self.threshold)
				.unwrap_or([DEFAULT_THRESHOLD_MIN, DEFAULT_THRESHOLD_MAX]),
			badj: overrides.badj.or(self.badj).unwrap_or(0),
			padding: overrides.padding.or(self.padding).unwrap_or(DEFAULT_PADDING),
			open: overrides.open || self.open,
		};
		validate_badj(settings.badj)?;
		validate_threshold(settings.threshold)?;
		Ok(settings)
	}
}

fn validate_badj(badj: i32) -> Result<()> {
	if !(0..=1).contains(&badj) {
		anyhow::bail!("badj must be 0 (interior) or 1 (exterior), got {}", badj);
	}
	Ok(())
}

fn validate_threshold([min, max]: [i32; 2]) -> Result<()> {
	if min > max {
		anyhow::bail!("threshold min {} is greater than max {}", min, max);
	}
	Ok(())
}

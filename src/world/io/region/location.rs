use std::path::Path;

use crate::{McError, McResult};

/// The position of a region among its peers, in region units.
/// Region `(x, z)` covers chunks `x*32..x*32+32` by `z*32..z*32+32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegionLocation {
	pub x: i32,
	pub z: i32,
}

impl RegionLocation {
	pub const fn new(x: i32, z: i32) -> Self {
		Self { x, z }
	}

	/// The region containing the given world chunk coordinate.
	pub const fn containing_chunk(chunk_x: i32, chunk_z: i32) -> Self {
		Self::new(chunk_x >> 5, chunk_z >> 5)
	}

	/// Parse a location from a region file name such as `r.-1.2.mca`.
	pub fn from_file_name<P: AsRef<Path>>(path: P) -> McResult<Self> {
		let path = path.as_ref();
		let invalid = || McError::InvalidRegionFileName(path.to_path_buf());
		let name = path.file_name()
			.and_then(|name| name.to_str())
			.ok_or_else(invalid)?;
		let mut parts = name.split('.');
		match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
			(Some("r"), Some(x), Some(z), Some("mca"), None) => {
				let x = x.parse().map_err(|_| invalid())?;
				let z = z.parse().map_err(|_| invalid())?;
				Ok(Self::new(x, z))
			}
			_ => Err(invalid()),
		}
	}

	/// The conventional file name for this region.
	pub fn file_name(&self) -> String {
		format!("r.{}.{}.mca", self.x, self.z)
	}
}

impl std::fmt::Display for RegionLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "r.{}.{}", self.x, self.z)
	}
}

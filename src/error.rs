use std::path::PathBuf;

use thiserror::Error;

use crate::world::io::region::{
	compressionscheme::CompressionScheme,
	inflate::InflateError,
};

/// The master error type.
#[derive(Debug, Error)]
pub enum McError {
	#[error("IO Error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Region has not been loaded.")]
	NotLoaded,
	#[error("Region has already been loaded.")]
	AlreadyLoaded,
	#[error("Out of range error.")]
	OutOfRange,
	#[error("Compression scheme {0:?} is not supported.")]
	UnsupportedCompression(CompressionScheme),
	#[error("Unknown compression scheme: {0}")]
	UnknownCompression(u8),
	#[error("Decompression failed: {0}")]
	Decompression(#[from] InflateError),
	#[error("Sector {sector} points into the region header.")]
	SectorInHeader { sector: u64 },
	#[error("Chunk data at {offset}..{end} is outside of the {len} byte region body.")]
	CorruptSector { offset: u64, end: u64, len: usize },
	#[error("Chunk length {0} is too short for its compression scheme.")]
	InvalidChunkLength(u32),
	#[error("Region file is too small to contain a header.")]
	InvalidRegionFile,
	#[error("Invalid region file name: {0}")]
	InvalidRegionFileName(PathBuf),
}

impl McError {

	pub fn range_check<T, R>(value: T, range: R) -> Result<(),McError>
	where
	T: PartialOrd + Sized,
	R: std::ops::RangeBounds<T> {
		if range.contains(&value) {
			Ok(())
		} else {
			Err(McError::OutOfRange)
		}
	}
}

pub type McResult<T> = Result<T,McError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn range_check_bounds() {
		assert!(McError::range_check(0, 0..32).is_ok());
		assert!(McError::range_check(31, 0..32).is_ok());
		assert!(matches!(McError::range_check(32, 0..32), Err(McError::OutOfRange)));
		assert!(matches!(McError::range_check(-1, 0..32), Err(McError::OutOfRange)));
	}

	#[test]
	fn error_messages() {
		let err = McError::UnknownCompression(99);
		assert_eq!(err.to_string(), "Unknown compression scheme: 99");
		let err = McError::SectorInHeader { sector: 1 };
		assert_eq!(err.to_string(), "Sector 1 points into the region header.");
	}
}

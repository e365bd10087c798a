pub mod header;
pub mod sector;
pub mod timestamp;
pub mod coord;
pub mod location;
pub mod compressionscheme;
pub mod inflate;
pub mod regiondata;
pub mod regionstore;

/// Size in bytes of a single sector within a region file.
pub const SECTOR_SIZE: usize = 4096;

/// Number of sectors occupied by the header (sector table + timestamp table).
pub const HEADER_SECTORS: u64 = 2;

/// Size in bytes of the header at the start of every region file.
pub const HEADER_SIZE: usize = SECTOR_SIZE * HEADER_SECTORS as usize;

/// Width (and depth) of a region in chunks.
pub const REGION_WIDTH: i32 = 32;

/// Number of chunk cells in a region.
pub const CHUNK_COUNT: usize = 1024;

/// Tests if a value is a multiple of 4096.
pub const fn is_multiple_of_4096(n: u64) -> bool {
	(n & 4095) == 0
}

pub mod prelude {
	pub use super::{
		header::*,
		sector::*,
		timestamp::*,
		coord::*,
		location::*,
		compressionscheme::*,
		inflate::*,
		regiondata::*,
		regionstore::*,
	};
}

#[test]
fn multiple_of_4096() {
	assert!(is_multiple_of_4096(0));
	assert!(is_multiple_of_4096(8192));
	assert!(!is_multiple_of_4096(8193));
}

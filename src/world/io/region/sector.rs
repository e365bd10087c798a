use crate::{
	ioext::*,
	McResult, McError,
};
use super::{
	HEADER_SECTORS,
	SECTOR_SIZE,
};
use std::{
	io::Read,
	ops::BitOr,
};

/// Offset and size are packed together, exactly as they are stored in the
/// sector table.
/// |Offset:3|Size:1|
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct RegionSector(u32);

impl RegionSector {
	/// Provide offset and size in 4KiB chunks.
	pub fn new(offset: u32, size: u8) -> Self {
		Self(offset.overflowing_shl(8).0.bitor(size as u32))
	}

	/// Creates a new empty RegionSector.
	pub const fn empty() -> Self {
		Self(0)
	}

	/// Decode a sector from the four bytes stored in the sector table.
	pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
		Self(u32::from_be_bytes(bytes))
	}

	/// Decode a sector from a table entry that was loaded as a
	/// little-endian word. The bytes are reversed before the
	/// offset and size are split apart.
	pub const fn from_le_word(word: u32) -> Self {
		Self(word.swap_bytes())
	}

	/// The packed value, as it would be read big-endian from the table.
	pub const fn raw(&self) -> u32 {
		self.0
	}

	/// The 4KiB sector offset.
	/// Multiply this by `4096` to get the seek offset.
	pub fn sector_offset(&self) -> u64 {
		self.0.overflowing_shr(8).0 as u64
	}

	/// The 4KiB sector offset that marks the end of this sector and the start of
	/// the next.
	pub fn sector_end_offset(&self) -> u64 {
		self.sector_offset() + self.sector_count()
	}

	/// The 4KiB sector count.
	/// Multiply this by `4096` to get the sector size.
	pub fn sector_count(&self) -> u64 {
		(self.0 & 0xFF) as u64
	}

	/// The offset in bytes that this sector begins
	/// at in the region file.
	pub fn offset(&self) -> u64 {
		self.sector_offset() * SECTOR_SIZE as u64
	}

	/// The offset in bytes that this sector begins at in the
	/// region body, which is everything after the two header sectors.
	/// Sectors that point into the header have no body offset.
	pub fn body_offset(&self) -> McResult<u64> {
		let sector = self.sector_offset();
		sector.checked_sub(HEADER_SECTORS)
			.map(|body_sector| body_sector * SECTOR_SIZE as u64)
			.ok_or(McError::SectorInHeader { sector })
	}

	/// The size in bytes that this sector occupies.
	pub fn size(&self) -> u64 {
		self.sector_count() * SECTOR_SIZE as u64
	}

	/// Determines if this is an "empty" sector.
	/// A sector is only empty when both the offset and the size are zero.
	pub fn is_empty(&self) -> bool {
		self.0 == 0
	}
}

impl Readable for RegionSector {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(Self(reader.read_value()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn splits_offset_and_count() {
		let sector = RegionSector::new(3, 2);
		assert_eq!(sector.raw(), 0x00000302);
		assert_eq!(sector.sector_offset(), 3);
		assert_eq!(sector.sector_count(), 2);
		assert_eq!(sector.offset(), 3 * 4096);
		assert_eq!(sector.size(), 2 * 4096);
		assert_eq!(sector.sector_end_offset(), 5);
	}

	#[test]
	fn decodes_stored_byte_order() {
		// 0x00000302 as it sits in the file.
		let stored = [0x00, 0x00, 0x03, 0x02];
		let sector = RegionSector::from_be_bytes(stored);
		assert_eq!(sector.sector_offset(), 3);
		assert_eq!(sector.sector_count(), 2);

		// The same bytes loaded as a little-endian word must be reversed.
		let word = u32::from_le_bytes(stored);
		assert_eq!(word, 0x02030000);
		assert_eq!(RegionSector::from_le_word(word), sector);

		let read: RegionSector = Cursor::new(&stored[..]).read_value().unwrap();
		assert_eq!(read, sector);
	}

	#[test]
	fn empty_only_when_both_zero() {
		assert!(RegionSector::empty().is_empty());
		assert!(RegionSector::from_be_bytes([0, 0, 0, 0]).is_empty());
		assert!(!RegionSector::new(0, 1).is_empty());
		assert!(!RegionSector::new(2, 0).is_empty());
	}

	#[test]
	fn body_offset_skips_header() {
		assert_eq!(RegionSector::new(5, 1).body_offset().unwrap(), 12288);
		assert_eq!(RegionSector::new(2, 1).body_offset().unwrap(), 0);
		assert!(matches!(
			RegionSector::new(1, 1).body_offset(),
			Err(McError::SectorInHeader { sector: 1 })
		));
	}
}

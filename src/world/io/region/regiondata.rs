use std::{
	fs::File,
	io::{
		BufReader,
		Cursor,
		Read,
	},
	path::Path,
};

use crate::{
	ioext::*,
	McError, McResult,
};

use super::{
	coord::*,
	header::*,
	sector::*,
	timestamp::*,
	HEADER_SIZE,
	is_multiple_of_4096,
};

/// The loaded contents of a region file: its header tables and the chunk
/// body that follows them.
/// The body starts right after the two header sectors, so a sector index
/// from the sector table maps to body offset `(index - 2) * 4096`.
#[derive(Debug, Clone)]
pub struct RegionData {
	header: RegionHeader,
	/// Everything after the header, owned here and only ever sliced.
	body: Vec<u8>,
}

impl RegionData {
	/// Build from a header and a body that has already been split off
	/// from the header.
	pub fn from_parts(header: RegionHeader, body: Vec<u8>) -> Self {
		Self {
			header,
			body,
		}
	}

	/// Build from a sector table and body, for callers that never had a
	/// timestamp table.
	pub fn from_sectors(sectors: SectorTable, body: Vec<u8>) -> Self {
		Self::from_parts(RegionHeader { sectors, timestamps: TimestampTable::default() }, body)
	}

	/// Split an entire region file into its header and body.
	/// The file must be at least large enough to hold the header.
	pub fn from_file_bytes(mut bytes: Vec<u8>) -> McResult<Self> {
		if bytes.len() < HEADER_SIZE {
			return Err(McError::InvalidRegionFile);
		}
		if !is_multiple_of_4096(bytes.len() as u64) {
			log::debug!("Region file size {} is not a multiple of 4096.", bytes.len());
		}
		let header = RegionHeader::read_from(&mut Cursor::new(&bytes[..HEADER_SIZE]))?;
		bytes.drain(..HEADER_SIZE);
		Ok(Self::from_parts(header, bytes))
	}

	/// Read a region file from any reader.
	pub fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		Self::from_file_bytes(bytes)
	}

	/// Load the region file at the given path.
	pub fn open<P: AsRef<Path>>(path: P) -> McResult<Self> {
		let path = path.as_ref();
		let mut reader = BufReader::new(File::open(path)?);
		let data = Self::read_from(&mut reader)?;
		log::debug!("Loaded region file {} ({} body bytes).", path.display(), data.body.len());
		Ok(data)
	}

	pub fn header(&self) -> &RegionHeader {
		&self.header
	}

	pub fn sectors(&self) -> &SectorTable {
		&self.header.sectors
	}

	pub fn timestamps(&self) -> &TimestampTable {
		&self.header.timestamps
	}

	/// The chunk data that follows the header.
	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Get a RegionSector for the provided coordinate.
	pub fn get_sector<C: Into<RegionCoord>>(&self, coord: C) -> RegionSector {
		self.header.sectors[coord]
	}

	/// Get the Timestamp for the provided coordinate.
	pub fn get_timestamp<C: Into<RegionCoord>>(&self, coord: C) -> Timestamp {
		self.header.timestamps[coord]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn file_with_sector(sector: [u8; 4], body: &[u8]) -> Vec<u8> {
		let mut bytes = vec![0u8; HEADER_SIZE];
		bytes[..4].copy_from_slice(&sector);
		bytes.extend_from_slice(body);
		bytes
	}

	#[test]
	fn splits_header_from_body() {
		let data = RegionData::from_file_bytes(file_with_sector([0, 0, 2, 1], &[1, 2, 3])).unwrap();
		assert_eq!(data.get_sector(RegionCoord::new(0, 0)), RegionSector::new(2, 1));
		assert_eq!(data.body(), &[1, 2, 3]);
	}

	#[test]
	fn header_only_file_is_valid() {
		let data = RegionData::from_file_bytes(vec![0u8; HEADER_SIZE]).unwrap();
		assert!(data.body().is_empty());
		assert!(data.sectors().iter().all(RegionSector::is_empty));
	}

	#[test]
	fn too_small_for_header() {
		assert!(matches!(
			RegionData::from_file_bytes(vec![0u8; HEADER_SIZE - 1]),
			Err(McError::InvalidRegionFile)
		));
	}

	#[test]
	fn opens_from_disk() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&file_with_sector([0, 0, 3, 2], &[0u8; 4096])).unwrap();
		file.flush().unwrap();
		let data = RegionData::open(file.path()).unwrap();
		assert_eq!(data.get_sector(RegionCoord::new(0, 0)), RegionSector::new(3, 2));
		assert_eq!(data.body().len(), 4096);
	}
}

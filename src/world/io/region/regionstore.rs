//! Lazy, cached chunk lookups over a loaded region.
//!
//! A [Region] starts out empty. Once its [RegionData] has been handed over
//! with [Region::load], chunks are located, decompressed and decoded on
//! first request, and whatever came out of that (a chunk, or nothing) is
//! remembered for the rest of the region's lifetime.

use std::{
	io::{
		Cursor,
		Seek, SeekFrom,
	},
	path::Path,
	sync::OnceLock,
};

use crate::{
	ioext::*,
	return_if,
	world::chunk::ChunkDecoder,
	McError, McResult,
};

use super::{
	coord::*,
	compressionscheme::*,
	inflate::*,
	location::*,
	regiondata::*,
	sector::*,
	timestamp::*,
	CHUNK_COUNT,
};

/// Bytes in front of a chunk payload: 4 for the length, 1 for the compression scheme.
const CHUNK_PREFIX_SIZE: u64 = 5;

/// Bytes of zlib header in front of the raw deflate stream.
const ZLIB_HEADER_SIZE: u64 = 2;

/// A resolved cache slot.
#[derive(Debug)]
pub enum ChunkSlot<C> {
	/// The chunk is not stored, or it could not be read.
	Absent,
	Present(C),
}

impl<C> ChunkSlot<C> {
	pub fn as_chunk(&self) -> Option<&C> {
		match self {
			ChunkSlot::Absent => None,
			ChunkSlot::Present(chunk) => Some(chunk),
		}
	}
}

/// What the cache knows about a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
	/// Nothing has been looked up yet.
	Unresolved,
	Absent,
	Present,
}

/// A region of 32x32 chunks that decodes its chunks on demand.
pub struct Region<D: ChunkDecoder, I: Inflate = RawInflate> {
	location: RegionLocation,
	data: OnceLock<RegionData>,
	decoder: D,
	inflater: I,
	/// One slot per chunk, indexed by [RegionCoord::index].
	/// An uninitialized slot is an unresolved coordinate.
	chunks: Box<[OnceLock<ChunkSlot<D::Chunk>>]>,
}

impl<D: ChunkDecoder> Region<D, RawInflate> {
	/// Creates an unloaded region that inflates with `flate2`.
	pub fn new(location: RegionLocation, decoder: D) -> Self {
		Self::with_inflater(location, decoder, RawInflate)
	}

	/// Opens a region file, taking the location from its file name.
	pub fn open<P: AsRef<Path>>(path: P, decoder: D) -> McResult<Self> {
		let path = path.as_ref();
		let region = Self::new(RegionLocation::from_file_name(path)?, decoder);
		region.load(RegionData::open(path)?)?;
		Ok(region)
	}
}

impl<D: ChunkDecoder, I: Inflate> Region<D, I> {
	pub fn with_inflater(location: RegionLocation, decoder: D, inflater: I) -> Self {
		Self {
			location,
			data: OnceLock::new(),
			decoder,
			inflater,
			chunks: (0..CHUNK_COUNT).map(|_| OnceLock::new()).collect(),
		}
	}

	pub fn location(&self) -> RegionLocation {
		self.location
	}

	pub fn decoder(&self) -> &D {
		&self.decoder
	}

	pub fn inflater(&self) -> &I {
		&self.inflater
	}

	/// Hands the region its data. A region can only be loaded once.
	pub fn load(&self, data: RegionData) -> McResult<()> {
		self.data.set(data).map_err(|_| McError::AlreadyLoaded)?;
		log::debug!("Region {} loaded.", self.location);
		Ok(())
	}

	pub fn is_loaded(&self) -> bool {
		self.data.get().is_some()
	}

	pub fn data(&self) -> McResult<&RegionData> {
		self.data.get().ok_or(McError::NotLoaded)
	}

	/// The sector table entry for a chunk.
	pub fn sector(&self, x: i32, z: i32) -> McResult<RegionSector> {
		let coord = RegionCoord::try_new(x, z)?;
		Ok(self.data()?.get_sector(coord))
	}

	/// The last time a chunk was saved, from the timestamp table.
	pub fn timestamp(&self, x: i32, z: i32) -> McResult<Timestamp> {
		let coord = RegionCoord::try_new(x, z)?;
		Ok(self.data()?.get_timestamp(coord))
	}

	/// Coordinates that have an entry in the sector table.
	/// Nothing is decompressed, so a listed chunk may still turn out to be unreadable.
	pub fn present_chunks(&self) -> impl Iterator<Item = RegionCoord> + '_ {
		self.data.get().into_iter().flat_map(|data| {
			RegionCoord::all().filter(move |&coord| !data.get_sector(coord).is_empty())
		})
	}

	/// Chunks that have already been decoded.
	pub fn cached_chunks(&self) -> impl Iterator<Item = (RegionCoord, &D::Chunk)> + '_ {
		RegionCoord::all().filter_map(move |coord| {
			self.chunks[coord.index()].get()
				.and_then(ChunkSlot::as_chunk)
				.map(|chunk| (coord, chunk))
		})
	}

	/// What the cache knows about a coordinate, or `None` outside of the grid.
	pub fn cached_state(&self, x: i32, z: i32) -> Option<SlotState> {
		let coord = RegionCoord::checked(x, z)?;
		Some(match self.chunks[coord.index()].get() {
			None => SlotState::Unresolved,
			Some(ChunkSlot::Absent) => SlotState::Absent,
			Some(ChunkSlot::Present(_)) => SlotState::Present,
		})
	}

	/// Checks the sector table for a chunk without decompressing it.
	/// Coordinates with no sector are cached as absent.
	pub fn exists_chunk(&self, x: i32, z: i32) -> bool {
		let Some(coord) = RegionCoord::checked(x, z) else {
			return false;
		};
		let Some(data) = self.data.get() else {
			return false;
		};
		if data.get_sector(coord).is_empty() {
			self.chunks[coord.index()].get_or_init(|| ChunkSlot::Absent);
			return false;
		}
		true
	}

	/// Get the chunk at a coordinate, decoding it the first time it is requested.
	/// Returns `None` if the region isn't loaded, the coordinate is outside of
	/// the region, or the chunk is missing or unreadable.
	pub fn get_chunk(&self, x: i32, z: i32) -> Option<&D::Chunk> {
		let data = self.data.get()?;
		let coord = RegionCoord::checked(x, z)?;
		self.chunks[coord.index()]
			.get_or_init(|| self.resolve(data, coord))
			.as_chunk()
	}

	fn resolve(&self, data: &RegionData, coord: RegionCoord) -> ChunkSlot<D::Chunk> {
		let sector = data.get_sector(coord);
		return_if!(sector.is_empty() => ChunkSlot::Absent);
		match self.read_chunk(data, coord, sector) {
			Ok(chunk) => {
				log::trace!("Region {}: decoded chunk {}.", self.location, coord);
				ChunkSlot::Present(chunk)
			}
			Err(err) => {
				log::warn!("Region {}: chunk {} is unavailable: {}", self.location, coord, err);
				ChunkSlot::Absent
			}
		}
	}

	fn read_chunk(&self, data: &RegionData, coord: RegionCoord, sector: RegionSector) -> McResult<D::Chunk> {
		let payload = compressed_payload(data.body(), sector)?;
		let inflated = self.inflater.inflate(payload)?;
		Ok(self.decoder.decode(inflated, coord))
	}
}

/// Locate the deflate stream of the chunk stored at `sector` within a region body.
///
/// The chunk starts with a big-endian length `L` covering the compression
/// scheme byte and everything after it. For ZLib chunks the 2 byte zlib header
/// is skipped and the next `L - 5` bytes are returned, borrowed from `body`.
pub fn compressed_payload(body: &[u8], sector: RegionSector) -> McResult<&[u8]> {
	let offset = sector.body_offset()?;
	let corrupt = |end: u64| McError::CorruptSector { offset, end, len: body.len() };
	return_if!(offset + CHUNK_PREFIX_SIZE > body.len() as u64 => Err(corrupt(offset + CHUNK_PREFIX_SIZE)));

	let mut reader = Cursor::new(body);
	reader.seek(SeekFrom::Start(offset))?;
	let length: u32 = reader.read_value()?;
	let end = offset + 4 + length as u64;
	return_if!(end > body.len() as u64 => Err(corrupt(end)));

	match reader.read_value::<CompressionScheme>()? {
		CompressionScheme::ZLib => {
			let size = (length as u64).checked_sub(CHUNK_PREFIX_SIZE)
				.ok_or(McError::InvalidChunkLength(length))?;
			reader.seek(SeekFrom::Current(ZLIB_HEADER_SIZE as i64))?;
			take_slice(&mut reader, size as usize)
		}
		unsupported => Err(McError::UnsupportedCompression(unsupported)),
	}
}

//! The boundary between the region store and whatever turns a
//! decompressed chunk payload into something meaningful.

use super::io::region::coord::RegionCoord;

/// Builds a chunk from its decompressed bytes.
/// The region store calls this at most once per coordinate and caches
/// whatever comes back, so the decoder never sees the same payload twice.
pub trait ChunkDecoder {
	type Chunk;

	fn decode(&self, bytes: Vec<u8>, coord: RegionCoord) -> Self::Chunk;
}

impl<C, F> ChunkDecoder for F
where
F: Fn(Vec<u8>, RegionCoord) -> C {
	type Chunk = C;

	fn decode(&self, bytes: Vec<u8>, coord: RegionCoord) -> C {
		self(bytes, coord)
	}
}

/// A chunk that has been decompressed but not decoded any further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
	pub coord: RegionCoord,
	pub data: Vec<u8>,
}

impl RawChunk {
	pub fn x(&self) -> i32 {
		self.coord.x()
	}

	pub fn z(&self) -> i32 {
		self.coord.z()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}
}

/// A [ChunkDecoder] that hands back the decompressed bytes untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawChunkDecoder;

impl ChunkDecoder for RawChunkDecoder {
	type Chunk = RawChunk;

	fn decode(&self, bytes: Vec<u8>, coord: RegionCoord) -> RawChunk {
		RawChunk {
			coord,
			data: bytes,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closures_are_decoders() {
		let decoder = |bytes: Vec<u8>, coord: RegionCoord| (bytes.len(), coord.x(), coord.z());
		assert_eq!(decoder.decode(vec![1, 2, 3], RegionCoord::new(4, 5)), (3, 4, 5));
	}

	#[test]
	fn raw_decoder_keeps_bytes() {
		let chunk = RawChunkDecoder.decode(vec![7, 8], RegionCoord::new(31, 2));
		assert_eq!(chunk.as_bytes(), &[7, 8]);
		assert_eq!((chunk.x(), chunk.z()), (31, 2));
	}
}

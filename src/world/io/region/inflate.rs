use std::io::Read;

use flate2::read::DeflateDecoder;
use thiserror::Error;

/// Failure reported by an [Inflate] implementation.
#[derive(Debug, Error)]
#[error("inflate failed ({kind:?}): {message}")]
pub struct InflateError {
	pub kind: std::io::ErrorKind,
	pub message: String,
}

impl InflateError {
	pub fn new<S: Into<String>>(kind: std::io::ErrorKind, message: S) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}
}

impl From<std::io::Error> for InflateError {
	fn from(value: std::io::Error) -> Self {
		Self::new(value.kind(), value.to_string())
	}
}

/// Decompresses a raw deflate stream (no zlib or gzip framing).
pub trait Inflate {
	fn inflate(&self, compressed: &[u8]) -> Result<Vec<u8>, InflateError>;
}

/// The default [Inflate], backed by `flate2`.
/// Decoding stops at the final deflate block, so bytes trailing the
/// stream are left unread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInflate;

impl Inflate for RawInflate {
	fn inflate(&self, compressed: &[u8]) -> Result<Vec<u8>, InflateError> {
		let mut decoder = DeflateDecoder::new(compressed);
		let mut inflated = Vec::with_capacity(compressed.len() * 4);
		decoder.read_to_end(&mut inflated)?;
		Ok(inflated)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use flate2::{
		write::DeflateEncoder,
		Compression,
	};
	use std::io::Write;

	fn deflate(data: &[u8]) -> Vec<u8> {
		let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
		encoder.write_all(data).unwrap();
		encoder.finish().unwrap()
	}

	#[test]
	fn inflates_raw_deflate() {
		let data = b"region chunk payload, region chunk payload".repeat(8);
		assert_eq!(RawInflate.inflate(&deflate(&data)).unwrap(), data);
	}

	#[test]
	fn ignores_trailing_bytes() {
		let data = b"trailing".to_vec();
		let mut compressed = deflate(&data);
		compressed.extend_from_slice(&[0xAB, 0xCD]);
		assert_eq!(RawInflate.inflate(&compressed).unwrap(), data);
	}

	#[test]
	fn rejects_garbage() {
		// Block type 3 is reserved.
		assert!(RawInflate.inflate(&[0xFF, 0xFF, 0xFF, 0xFF]).is_err());
	}
}

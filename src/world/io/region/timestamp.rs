use std::io::Read;
use chrono::{DateTime, Utc};
use crate::{
	McResult,
	for_each_int_type,
	ioext::*,
};

/// A 32-bit Unix timestamp, the last time a chunk was saved.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Timestamp(u32);

impl Timestamp {
	/// Chunks that were never saved have a zero timestamp.
	pub fn is_unset(&self) -> bool {
		self.0 == 0
	}

	pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
		DateTime::<Utc>::from_timestamp(self.0 as i64, 0)
	}
}

macro_rules! __timestamp_impls {
	($type:ty) => {
		impl From<$type> for Timestamp {
			fn from(value: $type) -> Self {
				Self(value as u32)
			}
		}

		impl From<Timestamp> for $type {
			fn from(value: Timestamp) -> Self {
				value.0 as $type
			}
		}
	};
}

for_each_int_type!(__timestamp_impls);

impl Readable for Timestamp {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(Self(reader.read_value()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Datelike, Timelike};
	use std::io::Cursor;

	#[test]
	fn reads_big_endian_seconds() {
		let bytes = 1_600_000_000u32.to_be_bytes();
		let timestamp: Timestamp = Cursor::new(&bytes[..]).read_value().unwrap();
		assert_eq!(u32::from(timestamp), 1_600_000_000);
		let datetime = timestamp.to_datetime().unwrap();
		assert_eq!(datetime.year(), 2020);
		assert_eq!(datetime.month(), 9);
		assert_eq!(datetime.day(), 13);
		assert_eq!(datetime.hour(), 12);
	}

	#[test]
	fn zero_is_unset() {
		assert!(Timestamp::default().is_unset());
		assert!(!Timestamp::from(1u32).is_unset());
	}
}

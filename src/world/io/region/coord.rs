use crate::{
	for_each_int_type,
	McError, McResult,
};
use super::REGION_WIDTH;

/// A region file contains up to 1024 chunks, which is 32x32 chunks.
/// This struct represents a chunk coordinate within a region file.
/// Coordinates built through `new` or the `From` conversions are
/// normalized to relative coordinates. Use `try_new` or `checked` when
/// a coordinate outside of the grid should be rejected instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RegionCoord(u16);

impl RegionCoord {
	/// Create a new RegionCoord.
	/// The x and z will be mathematically transformed into relative coordinates.
	/// So if the coordinate given to `new()` is `(32, 32)`, the result will be
	/// `(0, 0)`.
	pub fn new(x: u16, z: u16) -> Self {
		let xmod = x & 31;
		let zmod = z & 31;
		Self(xmod | zmod.overflowing_shl(5).0)
	}

	/// Create a RegionCoord from coordinates that must already be relative.
	pub fn try_new(x: i32, z: i32) -> McResult<Self> {
		McError::range_check(x, 0..REGION_WIDTH)?;
		McError::range_check(z, 0..REGION_WIDTH)?;
		Ok(Self::new(x as u16, z as u16))
	}

	/// Like `try_new`, but `None` for coordinates outside of the grid.
	pub fn checked(x: i32, z: i32) -> Option<Self> {
		Self::try_new(x, z).ok()
	}

	/// The index of this coordinate in the header tables (`x + z * 32`).
	pub fn index(&self) -> usize {
		self.0 as usize
	}

	pub fn x(&self) -> i32 {
		(self.0 & 31) as i32
	}

	pub fn z(&self) -> i32 {
		(self.0.overflowing_shr(5).0 & 31) as i32
	}

	pub fn tuple<T>(self) -> (T, T)
	where
	(T, T): From<Self> {
		self.into()
	}

	/// Iterate every coordinate in a region, in table order.
	pub fn all() -> impl Iterator<Item = RegionCoord> {
		(0u16..1024).map(RegionCoord)
	}
}

macro_rules! __regioncoord_impl {
	($type:ty) => {

		impl From<($type, $type)> for RegionCoord {
			fn from(value: ($type, $type)) -> Self {
				Self::new(value.0 as u16, value.1 as u16)
			}
		}

		impl From<$type> for RegionCoord {
			fn from(value: $type) -> Self {
				Self((value as u16) & 1023)
			}
		}

		impl From<RegionCoord> for ($type, $type) {
			fn from(value: RegionCoord) -> Self {
				(value.x() as $type, value.z() as $type)
			}
		}
	};
}

for_each_int_type!(__regioncoord_impl);

impl std::fmt::Display for RegionCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.z())
    }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_is_x_plus_z_times_32() {
		let coord = RegionCoord::new(3, 7);
		assert_eq!(coord.index(), 3 + 7 * 32);
		assert_eq!(coord.tuple::<i32>(), (3, 7));
		assert_eq!(RegionCoord::from(3 + 7 * 32), coord);
	}

	#[test]
	fn new_normalizes() {
		assert_eq!(RegionCoord::new(32, 33), RegionCoord::new(0, 1));
	}

	#[test]
	fn checked_rejects_outside_grid() {
		assert!(RegionCoord::checked(-1, 0).is_none());
		assert!(RegionCoord::checked(0, 32).is_none());
		assert!(RegionCoord::checked(32, 31).is_none());
		assert!(matches!(RegionCoord::try_new(0, -5), Err(McError::OutOfRange)));
		assert_eq!(RegionCoord::checked(31, 31).map(|c| c.index()), Some(1023));
	}

	#[test]
	fn all_covers_the_grid() {
		let coords: Vec<_> = RegionCoord::all().collect();
		assert_eq!(coords.len(), 1024);
		assert_eq!(coords[0], RegionCoord::new(0, 0));
		assert_eq!(coords[1023], RegionCoord::new(31, 31));
	}
}

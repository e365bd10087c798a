use std::io::Read;

use byteorder::{
	BigEndian,
	ReadBytesExt,
};

use crate::McResult;

/// A type that can be read from a byte stream.
/// Region files store everything big-endian, so the integer
/// implementations here are big-endian.
pub trait Readable: Sized {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self>;
}

impl Readable for u8 {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(reader.read_u8()?)
	}
}

impl Readable for u32 {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(reader.read_u32::<BigEndian>()?)
	}
}

pub trait ReadExt: Read + Sized {
	/// Read a [Readable] value from this reader.
	fn read_value<T: Readable>(&mut self) -> McResult<T> {
		T::read_from(self)
	}
}

impl<R: Read> ReadExt for R {}

/// Borrow the next `count` bytes of a cursor over a slice without copying them,
/// advancing the cursor past them.
pub fn take_slice<'a>(cursor: &mut std::io::Cursor<&'a [u8]>, count: usize) -> McResult<&'a [u8]> {
	let bytes: &'a [u8] = *cursor.get_ref();
	let start = cursor.position() as usize;
	let end = start.checked_add(count).ok_or(crate::McError::OutOfRange)?;
	if end > bytes.len() {
		return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
	}
	cursor.set_position(end as u64);
	Ok(&bytes[start..end])
}

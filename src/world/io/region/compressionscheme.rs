use std::io::Read;
use crate::{
    McResult, McError,
    ioext::*,
};

/// Compression scheme tag stored in front of every chunk payload.
/// Only ZLib payloads are read; GZip is recognized but rejected.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionScheme {
    /// GZip compression is used.
    GZip = 1,
    /// ZLib compression is used.
    ZLib = 2,
}

impl TryFrom<u8> for CompressionScheme {
    type Error = McError;

    fn try_from(value: u8) -> McResult<Self> {
        match value {
            1 => Ok(Self::GZip),
            2 => Ok(Self::ZLib),
            unexpected => Err(McError::UnknownCompression(unexpected)),
        }
    }
}

impl Readable for CompressionScheme {
    fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
        Self::try_from(reader.read_value::<u8>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn known_tags() {
        assert_eq!(CompressionScheme::try_from(1).unwrap(), CompressionScheme::GZip);
        assert_eq!(CompressionScheme::try_from(2).unwrap(), CompressionScheme::ZLib);
    }

    #[test]
    fn unknown_tags() {
        for tag in [0u8, 3, 99, 255] {
            assert!(matches!(
                Cursor::new([tag]).read_value::<CompressionScheme>(),
                Err(McError::UnknownCompression(found)) if found == tag
            ));
        }
    }
}

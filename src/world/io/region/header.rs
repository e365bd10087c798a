use crate::{
    ioext::*,
    McResult,
};

use super::sector::*;
use super::timestamp::*;
use super::coord::*;
use super::CHUNK_COUNT;

use std::{
    io::Read,
    ops::Index,
};

/// This trait defines the offset in a file where
/// a table can be found for a specific type.
/// It is implemented for [RegionSector] and [Timestamp].
pub trait RegionTableItem {
    /// The offset in the file that this type's table begins.
    const OFFSET: u64;
}

impl RegionTableItem for RegionSector {
    const OFFSET: u64 = 0;
}

impl RegionTableItem for Timestamp {
    const OFFSET: u64 = 4096;
}

/// A table of 1024 elements that contain information related to
/// a chunk within a Region file.
#[derive(Debug, Clone)]
pub struct RegionTable<T: RegionTableItem>(Box<[T; CHUNK_COUNT]>);

/// A table of 1024 [RegionSector] elements for each potential chunk in
/// a 32x32 chunk region file.
pub type SectorTable = RegionTable<RegionSector>;

/// A table of 1024 [Timestamp] elements for each potential chunk in a
/// 32x32 chunk region file.
pub type TimestampTable = RegionTable<Timestamp>;

/// The header at the beginning of every region file.
/// It contains 1024 [RegionSector] elements and 1024 [Timestamp] elements.
#[derive(Debug, Clone, Default)]
pub struct RegionHeader {
    /// The sector table, containing information about where chunks exist
    /// in the file.
    pub sectors: SectorTable,
    /// The timestamp table, which tells the last modification time for the chunk.
    pub timestamps: TimestampTable,
}

impl<T: RegionTableItem> RegionTable<T> {
    pub const OFFSET: u64 = T::OFFSET;

    /// Returns an iterator of the elements in the table.
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.0.iter()
    }
}

impl<T: Default + Copy + RegionTableItem> Default for RegionTable<T> {
    fn default() -> Self {
        Self(Box::new([T::default(); CHUNK_COUNT]))
    }
}

impl<C: Into<RegionCoord>,T: RegionTableItem> Index<C> for RegionTable<T> {
    type Output = T;

    fn index(&self, index: C) -> &Self::Output {
        let coord: RegionCoord = index.into();
        &self.0[coord.index()]
    }
}

impl<T: Readable + Default + Copy + RegionTableItem> Readable for RegionTable<T> {
    fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
        let mut table = Box::new([T::default(); CHUNK_COUNT]);
        for item in table.iter_mut() {
            *item = T::read_from(reader)?;
        }
        Ok(Self(table))
    }
}

impl<T: RegionTableItem> From<[T; CHUNK_COUNT]> for RegionTable<T> {
    fn from(value: [T; CHUNK_COUNT]) -> Self {
        Self(Box::new(value))
    }
}

impl Readable for RegionHeader {
    fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
        Ok(Self {
            sectors: SectorTable::read_from(reader)?,
            timestamps: TimestampTable::read_from(reader)?,
        })
    }
}

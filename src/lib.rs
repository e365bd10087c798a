pub mod world;
pub mod ioext;
pub mod error;
pub mod macros;

pub use flate2;

pub use error::McError;
pub use error::McResult;

pub use world::io::region::prelude::*;
pub use world::chunk::{ChunkDecoder, RawChunk, RawChunkDecoder};

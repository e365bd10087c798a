pub mod io;
pub mod chunk;

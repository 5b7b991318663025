pub mod chunker;
pub mod config;
pub mod error;
pub mod formatter;
pub mod pipeline;
pub mod record;
pub mod reducer;
pub mod table;

pub use error::*;

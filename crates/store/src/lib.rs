//! Store - Ingestion, export, print layout, and settings
//!
//! This crate normalizes papers returned by the conversion service,
//! wraps rendered papers for Word export and printing, hands out session
//! image references, and persists application settings.

mod error;
mod ingest;
mod conversion;
mod export;
mod print;
mod images;
mod settings;

pub use error::*;
pub use ingest::*;
pub use conversion::*;
pub use export::*;
pub use print::*;
pub use images::*;
pub use settings::*;

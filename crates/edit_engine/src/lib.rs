//! Edit Engine - Copy-on-write mutation commands and element reordering
//!
//! Every command takes the current document and returns the next one;
//! the input document is never modified. The editing session owns the
//! current document and the drag state used for reordering question
//! elements.

mod command;
mod executor;
mod error;
mod header_commands;
mod section_commands;
mod question_commands;
mod sub_question_commands;
mod option_commands;
mod image_commands;
mod reorder;

pub use command::*;
pub use executor::*;
pub use error::*;
pub use header_commands::*;
pub use section_commands::*;
pub use question_commands::*;
pub use sub_question_commands::*;
pub use option_commands::*;
pub use image_commands::*;
pub use reorder::*;

//! Render Model - Question elements to renderable output
//!
//! This crate walks a document and each question's element order to
//! produce element descriptors, and renders the whole paper to markup in
//! either edit mode or view mode.

mod mode;
mod text;
mod element;
mod driver;
mod markup;
mod paper;
mod error;

pub use mode::*;
pub use text::*;
pub use element::*;
pub use driver::*;
pub use markup::*;
pub use paper::*;
pub use error::*;

//! Exam Model - Structured exam paper document types
//!
//! This crate provides the document model for the exam paper builder:
//! a header, ordered sections of questions, sub-questions and options,
//! and the per-question element order that drives presentation.

mod document;
mod element;
mod error;
mod image;
mod numbering;
mod path;
mod question;
mod section;

pub use document::*;
pub use element::*;
pub use error::*;
pub use image::*;
pub use numbering::*;
pub use path::*;
pub use question::*;
pub use section::*;

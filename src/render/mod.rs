//! Rendering module for printing paragraph trees and query results.

mod json;
mod text;

pub use json::{paragraphs_to_json, to_json, JsonFormat};
pub use text::to_text;

pub mod objects;
pub mod writer;
pub mod document;
pub mod fonts;
pub mod layout;

pub use document::PdfDocument;
pub use fonts::BuiltinFont;
pub use layout::{LayoutEngine, LayoutParams, Section, TextPlacement};

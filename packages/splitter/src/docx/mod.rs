//! WordprocessingML package access.

pub mod body;
pub mod package;
pub mod styles;

pub use body::{Block, BlockKind, DocumentBody, Paragraph};
pub use package::WordDocument;
pub use styles::StyleSheet;

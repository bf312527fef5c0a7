//! Chapter splitter - split numbered Word documents into chapters.
//!
//! Word documents store list numbering abstractly: a paragraph carries a
//! `(list, level)` reference and the visible "第三章" or "3.2.1" only exists
//! after the counters are replayed. This crate resolves that numbering and
//! uses it, together with paragraph alignment, to find chapter headings and
//! write one .docx file per chapter.
//!
//! # Example
//!
//! ```
//! use chapter_splitter::numbering::NumberFormat;
//!
//! let format = NumberFormat::parse("chineseCounting");
//! assert_eq!(format.format(11).unwrap(), Some("十一".to_string()));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, heading patterns and split options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: WordprocessingML node helpers
//! - [`numbering`]: Numeral formatting, numbering definitions, counters
//! - [`docx`]: Reading and writing .docx packages
//! - [`splitting`]: Chapter boundary detection and block partitioning
//! - [`manifest`]: YAML chapter manifest
//! - [`cli`]: Command-line interface
//! - [`splitter`]: Main splitter service

pub mod cli;
pub mod config;
pub mod docx;
pub mod error;
pub mod manifest;
pub mod numbering;
pub mod splitter;
pub mod splitting;
pub mod xml;

// Re-export main functions
pub use splitter::split_word;

// Re-export commonly used items
pub use config::{RestartPolicy, SplitOptions};
pub use docx::WordDocument;
pub use error::{Result, SplitterError};
pub use manifest::{ChapterMap, ChapterRecord};

//! Chapter splitting system.
//!
//! A single ordered pass over the body blocks turns numbered, centered
//! headings such as "第三章" into half-open block ranges, one per output
//! file.

mod detector;
mod engine;
mod strategy;
mod types;

pub use detector::{chinese_to_num, ChapterBoundaryDetector};
pub use engine::SplitEngine;
pub use strategy::SplitStrategy;
pub use types::{ChapterSpan, HeadingCandidate, SplitContext};

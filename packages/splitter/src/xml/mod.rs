//! WordprocessingML XML helpers.

mod utils;

pub use utils::*;

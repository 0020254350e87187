//! Recording domain module

mod entry;
mod order;

pub use entry::Recording;
pub use order::sort_newest_first;

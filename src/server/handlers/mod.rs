//! HTTP handlers.

mod index;
mod search;

pub use index::index_handler;
pub use search::search_handler;

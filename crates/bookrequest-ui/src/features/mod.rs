//! Feature slices: catalog search, book details and the download queue.

pub mod details;
pub mod queue;
pub mod search;

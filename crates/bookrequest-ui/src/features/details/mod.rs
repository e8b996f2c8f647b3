//! Book detail modal and the download trigger shared with result cards.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

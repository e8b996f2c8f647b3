//! Download queue: status panels, active-count badge and queue commands.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

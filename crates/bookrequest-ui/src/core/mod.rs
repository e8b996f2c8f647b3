//! Core, DOM-free primitives and helpers for the Web UI.
pub mod api;
pub mod config;
pub mod display;
pub mod endpoints;
pub mod store;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

//! # theme-switcher
//!
//! Persisted light/dark toggle for a static page, compiled to WebAssembly.
//!
//! On `DOMContentLoaded` the controller finds the `#theme-switcher` checkbox,
//! checks it if `localStorage["mode"]` is exactly `"true"`, and from then on
//! writes the checkbox state back to `localStorage` on every click.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Page-load initialization and the click handler |
//! | [`preference`] | Stored preference decoding/encoding |
//! | [`store`] | `getItem`/`setItem` storage seam and an in-memory store |
//! | [`control`] | Toggle element and document seams |
//! | [`config`] | Element id, storage key, log level |
//! | [`error`] | Binding-level errors |
//! | [`consts`] | Fixed identifiers |
//! | `web` | web-sys binding and wasm entry point (feature `browser`) |

pub mod config;
pub mod consts;
pub mod control;
pub mod controller;
pub mod error;
pub mod preference;
pub mod store;
#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod testing;

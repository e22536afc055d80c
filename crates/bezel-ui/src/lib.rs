#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Yew front-end for Bezel: the `DeviceFrame` and `MobileDeviceEmulator`
//! components plus a small showcase app.
//! Layout math lives in `bezel-core`; this crate only maps it onto markup.

pub mod showcase;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod console;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
#[cfg(target_arch = "wasm32")]
pub use components::{DeviceFrame, MobileDeviceEmulator, Spinner};
#[cfg(target_arch = "wasm32")]
pub use console::ConsoleSink;

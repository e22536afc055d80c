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

//! DOM-free core for the Bezel device frame component.
//!
//! Layout: `device.rs` (preset table and lookup), `geometry.rs` (lengths,
//! insets, transforms), `frame.rs` (frame/screen/notch/button layout),
//! `emulator.rs` (content strategy and shell plan), `config.rs` (emulator
//! configuration and defaults), `diagnostics.rs` (observer for recoverable
//! failures), `css.rs` (inline style emission), `loading.rs` (embedded page
//! load tracking).

pub mod config;
pub mod css;
pub mod device;
pub mod diagnostics;
pub mod emulator;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod loading;
pub mod orientation;

pub use config::{EmulatorConfig, defaults};
pub use css::Style;
pub use device::{
    DEFAULT_SPECIFICATION, DeviceSpecification, DeviceType, NotchVariant, presets,
    resolve_specification, resolve_specification_by_name, try_resolve_specification,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, Severity, TracingSink};
pub use emulator::{ContentPlan, EmbeddedPage, EmulatorBody, EmulatorPlan, UnframedLayout};
pub use error::{ConfigError, ConfigResult, LookupError};
pub use frame::{ButtonKind, ButtonLayout, FrameLayout, FrameOptions, NotchLayout};
pub use geometry::{CornerRadii, Insets, Length, Size, Transform};
pub use loading::{LoadEvent, LoadState};
pub use orientation::{LandscapeTransform, Orientation};

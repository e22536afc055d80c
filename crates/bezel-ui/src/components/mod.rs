//! Yew components mapping `bezel-core` layouts onto markup.

pub mod device_frame;
pub mod emulator;
pub mod spinner;

pub use device_frame::{DeviceFrame, render_frame};
pub use emulator::MobileDeviceEmulator;
pub use spinner::Spinner;

//! rgb-color-picker: a reusable RGB color picker widget for GTK4
//!
//! This library provides:
//! - An [`RgbColorPicker`] widget with one slider per channel, live
//!   value labels, a swatch preview, and an optional web-color readout
//! - An [`RgbPickerDialog`] modal host with confirm/cancel callbacks
//! - The [`Rgb`] value type and [`to_web_color`] formatting

pub mod ui;

// Re-export commonly used types
pub use ui::{to_web_color, PickerOptions, Rgb, RgbColorPicker, RgbPickerDialog};

//! UI components

mod color;
mod rgb_picker;
mod rgb_picker_dialog;

pub use color::{to_web_color, Channel, Rgb, DEFAULT_COLOR};
pub use rgb_picker::{PickerOptions, RgbColorPicker};
pub use rgb_picker_dialog::RgbPickerDialog;

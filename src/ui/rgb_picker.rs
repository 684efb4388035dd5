//! RGB color picker widget with one slider per channel
//!
//! Three 0-255 scales for red, green and blue, live numeric value
//! labels, a swatch preview, and an optional web-color readout. A
//! single change callback reports every committed color along with a
//! `from_user` flag distinguishing slider drags from programmatic
//! `set_color` calls.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, DrawingArea, Label, Orientation, Scale};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::color::{to_web_color, Channel, Rgb};

/// Construction-time options
#[derive(Debug, Clone, Copy)]
pub struct PickerOptions {
    /// Initial color as packed `0xRRGGBB`; mid-gray when `None`
    pub initial_color: Option<u32>,
    /// Whether the web-color readout row is visible
    pub show_web_color: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            initial_color: None,
            show_web_color: true,
        }
    }
}

/// Widget state shared between the slider handlers and the swatch
/// draw func
struct PickerState {
    color: Rgb,
    show_web_color: bool,
}

impl PickerState {
    fn new(options: PickerOptions) -> Self {
        Self {
            color: options
                .initial_color
                .map(Rgb::from_packed)
                .unwrap_or_default(),
            show_web_color: options.show_web_color,
        }
    }

    /// Store a reported slider position in a single channel
    ///
    /// The scale range already bounds the value; the clamp guards
    /// against an out-of-range report all the same.
    fn set_channel_clamped(&mut self, channel: Channel, raw: i32) {
        self.color.set_channel(channel, raw.clamp(0, 255) as u8);
    }

    fn web_color_text(&self) -> String {
        to_web_color(self.color.to_packed(), false)
    }
}

/// RGB color picker widget
pub struct RgbColorPicker {
    container: GtkBox,
    state: Rc<RefCell<PickerState>>,
    red_scale: Scale,
    green_scale: Scale,
    blue_scale: Scale,
    red_value_label: Label,
    green_value_label: Label,
    blue_value_label: Label,
    swatch: DrawingArea,
    web_color_row: GtkBox,
    web_color_value_label: Label,
    on_color_changed: Rc<RefCell<Option<Box<dyn Fn(u32, bool)>>>>,
    // Set while set_color repositions the scales so their handlers
    // don't re-enter as user changes
    updating: Rc<RefCell<bool>>,
}

impl RgbColorPicker {
    pub fn new(options: PickerOptions) -> Self {
        let state = Rc::new(RefCell::new(PickerState::new(options)));
        let on_color_changed: Rc<RefCell<Option<Box<dyn Fn(u32, bool)>>>> =
            Rc::new(RefCell::new(None));
        let updating = Rc::new(RefCell::new(false));

        let container = GtkBox::new(Orientation::Vertical, 12);
        container.set_margin_start(12);
        container.set_margin_end(12);
        container.set_margin_top(12);
        container.set_margin_bottom(12);

        // === Swatch ===
        let swatch = DrawingArea::new();
        swatch.set_size_request(-1, 60);
        swatch.set_hexpand(true);

        let state_for_swatch = state.clone();
        swatch.set_draw_func(move |_, cr, width, height| {
            state_for_swatch.borrow().color.apply_to_cairo(cr);
            let _ = cr.rectangle(0.0, 0.0, width as f64, height as f64);
            let _ = cr.fill();
        });
        container.append(&swatch);

        // === Channel sliders ===
        let initial = state.borrow().color;
        let (red_row, red_scale, red_value_label) =
            Self::create_channel_row("R:", initial.r);
        let (green_row, green_scale, green_value_label) =
            Self::create_channel_row("G:", initial.g);
        let (blue_row, blue_scale, blue_value_label) =
            Self::create_channel_row("B:", initial.b);

        container.append(&red_row);
        container.append(&green_row);
        container.append(&blue_row);

        // === Web-color readout ===
        let web_color_row = GtkBox::new(Orientation::Horizontal, 6);
        let web_color_label = Label::new(Some("Web color:"));
        let web_color_value_label = Label::new(Some(&state.borrow().web_color_text()));
        web_color_value_label.set_halign(gtk4::Align::Start);
        web_color_row.append(&web_color_label);
        web_color_row.append(&web_color_value_label);
        web_color_row.set_visible(state.borrow().show_web_color);
        container.append(&web_color_row);

        Self::connect_channel(
            &red_scale,
            Channel::Red,
            &state,
            &updating,
            &red_value_label,
            &web_color_value_label,
            &swatch,
            &on_color_changed,
        );
        Self::connect_channel(
            &green_scale,
            Channel::Green,
            &state,
            &updating,
            &green_value_label,
            &web_color_value_label,
            &swatch,
            &on_color_changed,
        );
        Self::connect_channel(
            &blue_scale,
            Channel::Blue,
            &state,
            &updating,
            &blue_value_label,
            &web_color_value_label,
            &swatch,
            &on_color_changed,
        );

        Self {
            container,
            state,
            red_scale,
            green_scale,
            blue_scale,
            red_value_label,
            green_value_label,
            blue_value_label,
            swatch,
            web_color_row,
            web_color_value_label,
            on_color_changed,
            updating,
        }
    }

    fn create_channel_row(label: &str, value: u8) -> (GtkBox, Scale, Label) {
        let row = GtkBox::new(Orientation::Horizontal, 6);

        let name_label = Label::new(Some(label));
        name_label.set_width_chars(3);
        row.append(&name_label);

        let scale = Scale::with_range(Orientation::Horizontal, 0.0, 255.0, 1.0);
        scale.set_value(value as f64);
        scale.set_hexpand(true);
        scale.set_draw_value(false);
        row.append(&scale);

        let value_label = Label::new(Some(&value.to_string()));
        value_label.set_width_chars(3);
        value_label.set_halign(gtk4::Align::End);
        row.append(&value_label);

        (row, scale, value_label)
    }

    fn connect_channel(
        scale: &Scale,
        channel: Channel,
        state: &Rc<RefCell<PickerState>>,
        updating: &Rc<RefCell<bool>>,
        value_label: &Label,
        web_color_value_label: &Label,
        swatch: &DrawingArea,
        on_color_changed: &Rc<RefCell<Option<Box<dyn Fn(u32, bool)>>>>,
    ) {
        let state = state.clone();
        let updating = updating.clone();
        let value_label = value_label.clone();
        let web_color_value_label = web_color_value_label.clone();
        let swatch = swatch.clone();
        let on_color_changed = on_color_changed.clone();

        scale.connect_value_changed(move |scale| {
            if *updating.borrow() {
                return;
            }
            let color = {
                let mut state = state.borrow_mut();
                state.set_channel_clamped(channel, scale.value() as i32);
                value_label.set_text(&state.color.channel(channel).to_string());
                if state.show_web_color {
                    web_color_value_label.set_text(&state.web_color_text());
                }
                state.color.to_packed()
            };
            swatch.queue_draw();
            debug!("channel {:?} changed by user, color now #{:06X}", channel, color);
            if let Some(callback) = on_color_changed.borrow().as_ref() {
                callback(color, true);
            }
        });
    }

    /// The root widget, for embedding in a container
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// Current color as packed `0xRRGGBB`, no alpha byte set
    pub fn get_color(&self) -> u32 {
        self.state.borrow().color.to_packed()
    }

    /// Set the color programmatically
    ///
    /// Repositions the sliders and refreshes all derived display, then
    /// fires the change callback with `from_user == false`. Fires on
    /// every call, including a set to the current value.
    pub fn set_color(&self, color: u32) {
        let color = {
            let mut state = self.state.borrow_mut();
            state.color = Rgb::from_packed(color);
            state.color
        };

        *self.updating.borrow_mut() = true;
        self.red_scale.set_value(color.r as f64);
        self.green_scale.set_value(color.g as f64);
        self.blue_scale.set_value(color.b as f64);
        *self.updating.borrow_mut() = false;

        self.refresh_display();

        let packed = color.to_packed();
        debug!("color set programmatically to #{:06X}", packed);
        if let Some(callback) = self.on_color_changed.borrow().as_ref() {
            callback(packed, false);
        }
    }

    /// Show or hide the web-color readout
    ///
    /// Channel values are untouched; on re-enable the readout is
    /// rewritten from the current color since updates are skipped while
    /// it is hidden.
    pub fn set_show_web_color(&self, show: bool) {
        self.state.borrow_mut().show_web_color = show;
        self.web_color_row.set_visible(show);
        if show {
            self.web_color_value_label
                .set_text(&self.state.borrow().web_color_text());
        }
    }

    /// Register the change callback, replacing any prior registration
    ///
    /// The callback receives the packed color and a `from_user` flag:
    /// true for slider drags, false for `set_color`.
    pub fn set_on_color_changed<F: Fn(u32, bool) + 'static>(&self, callback: F) {
        *self.on_color_changed.borrow_mut() = Some(Box::new(callback));
    }

    fn refresh_display(&self) {
        let state = self.state.borrow();
        self.red_value_label.set_text(&state.color.r.to_string());
        self.green_value_label.set_text(&state.color.g.to_string());
        self.blue_value_label.set_text(&state.color.b.to_string());
        if state.show_web_color {
            self.web_color_value_label.set_text(&state.web_color_text());
        }
        self.swatch.queue_draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_state() -> PickerState {
        PickerState::new(PickerOptions::default())
    }

    #[test]
    fn test_default_state_is_mid_gray() {
        let state = default_state();
        assert_eq!(state.color, Rgb::new(127, 127, 127));
        assert!(state.show_web_color);
        assert_eq!(state.web_color_text(), "#7F7F7F");
    }

    #[test]
    fn test_initial_color_option() {
        let state = PickerState::new(PickerOptions {
            initial_color: Some(0xFF0A_141E),
            show_web_color: false,
        });
        assert_eq!(state.color, Rgb::new(10, 20, 30));
        assert!(!state.show_web_color);
    }

    #[test]
    fn test_drag_updates_exactly_one_channel() {
        let mut state = default_state();
        state.set_channel_clamped(Channel::Red, 40);
        assert_eq!(state.color, Rgb::new(40, 127, 127));
        assert_eq!(state.color.to_packed(), 0x287F7F);
        assert_eq!(state.web_color_text(), "#287F7F");
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        let mut state = default_state();
        state.set_channel_clamped(Channel::Green, 300);
        assert_eq!(state.color.g, 255);
        state.set_channel_clamped(Channel::Blue, -10);
        assert_eq!(state.color.b, 0);
        assert_eq!(state.color.r, 127);
    }

    #[test]
    fn test_readout_flag_leaves_channels_untouched() {
        let mut state = default_state();
        state.set_channel_clamped(Channel::Red, 40);
        state.show_web_color = false;
        state.show_web_color = true;
        assert_eq!(state.color, Rgb::new(40, 127, 127));
        assert_eq!(state.web_color_text(), "#287F7F");
    }
}

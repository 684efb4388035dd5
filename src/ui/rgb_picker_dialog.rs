//! Modal chooser dialog hosting an RGB color picker widget

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Orientation, Window};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::ui::rgb_picker::{PickerOptions, RgbColorPicker};

/// Pending-color state shared between the picker subscription and the
/// button handlers
struct DialogState {
    pending: u32,
}

impl DialogState {
    fn new() -> Self {
        Self { pending: 0 }
    }

    /// Take a picker notification
    ///
    /// Only user-originated changes move the pending color; a
    /// programmatic notification echoes a `set_color` the dialog
    /// performed itself.
    fn on_picker_change(&mut self, color: u32, from_user: bool) {
        if from_user {
            self.pending = color;
        }
    }

    /// The value delivered to the chosen callback on confirm
    fn choose(&self) -> u32 {
        self.pending
    }
}

/// Modal dialog wrapping an [`RgbColorPicker`] with OK / Cancel actions
///
/// The dialog owns the embedded picker and subscribes to it once at
/// construction. Its pending color follows user-originated picker
/// changes only; programmatic notifications are ignored since the
/// dialog performed the corresponding `set_color` itself.
pub struct RgbPickerDialog {
    window: Window,
    picker: RgbColorPicker,
    state: Rc<RefCell<DialogState>>,
    on_color_chosen: Rc<RefCell<Option<Box<dyn Fn(u32)>>>>,
    on_cancel: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl RgbPickerDialog {
    pub fn new(parent: Option<&Window>) -> Self {
        let window = Window::builder()
            .title("Select Color")
            .modal(true)
            .default_width(360)
            .build();

        if let Some(parent) = parent {
            window.set_transient_for(Some(parent));
        }

        let picker = RgbColorPicker::new(PickerOptions::default());
        let state = Rc::new(RefCell::new(DialogState::new()));
        let on_color_chosen: Rc<RefCell<Option<Box<dyn Fn(u32)>>>> =
            Rc::new(RefCell::new(None));
        let on_cancel: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::new(RefCell::new(None));

        let state_for_picker = state.clone();
        picker.set_on_color_changed(move |color, from_user| {
            state_for_picker.borrow_mut().on_picker_change(color, from_user);
        });

        let main_box = GtkBox::new(Orientation::Vertical, 12);
        main_box.append(picker.widget());

        let button_box = GtkBox::new(Orientation::Horizontal, 6);
        button_box.set_halign(gtk4::Align::End);
        button_box.set_margin_start(12);
        button_box.set_margin_end(12);
        button_box.set_margin_bottom(12);

        let cancel_button = Button::with_label("Cancel");
        let ok_button = Button::with_label("OK");
        ok_button.add_css_class("suggested-action");

        button_box.append(&cancel_button);
        button_box.append(&ok_button);
        main_box.append(&button_box);

        window.set_child(Some(&main_box));

        let window_clone = window.clone();
        let state_clone = state.clone();
        let on_color_chosen_clone = on_color_chosen.clone();
        ok_button.connect_clicked(move |_| {
            let color = state_clone.borrow().choose();
            debug!("color chosen: #{:06X}", color);
            if let Some(callback) = on_color_chosen_clone.borrow().as_ref() {
                callback(color);
            }
            window_clone.close();
        });

        let window_clone = window.clone();
        let on_cancel_clone = on_cancel.clone();
        cancel_button.connect_clicked(move |_| {
            debug!("color choice cancelled");
            if let Some(callback) = on_cancel_clone.borrow().as_ref() {
                callback();
            }
            window_clone.close();
        });

        Self {
            window,
            picker,
            state,
            on_color_chosen,
            on_cancel,
        }
    }

    /// Pending color as packed `0xRRGGBB`
    pub fn get_color(&self) -> u32 {
        self.state.borrow().pending
    }

    /// Set the pending color and forward it to the embedded picker
    pub fn set_color(&self, color: u32) {
        self.state.borrow_mut().pending = color;
        self.picker.set_color(color);
    }

    /// Register the confirm callback, replacing any prior registration
    pub fn set_on_color_chosen<F: Fn(u32) + 'static>(&self, callback: F) {
        *self.on_color_chosen.borrow_mut() = Some(Box::new(callback));
    }

    /// Register the cancel callback, replacing any prior registration
    pub fn set_on_cancel<F: Fn() + 'static>(&self, callback: F) {
        *self.on_cancel.borrow_mut() = Some(Box::new(callback));
    }

    /// Sync the picker to the pending color and show the dialog
    pub fn present(&self) {
        let color = self.state.borrow().pending;
        self.picker.set_color(color);
        self.window.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::color::Rgb;

    #[test]
    fn test_pending_starts_at_zero() {
        assert_eq!(DialogState::new().choose(), 0);
    }

    #[test]
    fn test_user_notification_updates_pending() {
        let mut state = DialogState::new();
        state.on_picker_change(Rgb::new(10, 20, 30).to_packed(), true);
        assert_eq!(state.choose(), 0x0A141E);
    }

    #[test]
    fn test_programmatic_notification_is_ignored() {
        let mut state = DialogState::new();
        state.on_picker_change(Rgb::new(10, 20, 30).to_packed(), true);
        state.on_picker_change(0x287F7F, false);
        assert_eq!(state.choose(), 0x0A141E);
    }

    #[test]
    fn test_dismissal_leaves_pending_untouched() {
        let mut state = DialogState::new();
        state.on_picker_change(0x287F7F, true);
        // Cancel has no state effect; the last user color stays pending
        // for the next presentation
        assert_eq!(state.pending, 0x287F7F);
        assert_eq!(state.choose(), 0x287F7F);
    }
}

//! Demo application for the RGB color picker widget and dialog

use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, Button, Orientation};
use log::info;
use rgb_color_picker::{to_web_color, PickerOptions, RgbColorPicker, RgbPickerDialog};

const APP_ID: &str = "io.github.rgb_color_picker.demo";

/// Demo for the rgb-color-picker widget and chooser dialog
#[derive(Parser, Debug, Clone)]
#[command(name = "rgb-color-picker-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial color as hex digits, e.g. 287F7F or #287F7F
    #[arg(short = 'c', long = "color", value_parser = parse_color)]
    color: Option<u32>,

    /// Hide the web-color readout
    #[arg(long = "no-web-color")]
    no_web_color: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse a hex color string into a packed integer
fn parse_color(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches('#');
    u32::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex color {}: {}", s, e))
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override the CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| build_ui(app, &cli));

    // Pass empty args since we already parsed them
    app.run_with_args(&["rgb-color-picker-demo"]);
}

fn build_ui(app: &Application, cli: &Cli) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("RGB Color Picker Demo")
        .default_width(420)
        .build();

    let picker = RgbColorPicker::new(PickerOptions {
        initial_color: cli.color,
        show_web_color: !cli.no_web_color,
    });
    picker.set_on_color_changed(|color, from_user| {
        info!(
            "picker color changed to {} ({})",
            to_web_color(color, false),
            if from_user { "user" } else { "programmatic" }
        );
    });

    let main_box = GtkBox::new(Orientation::Vertical, 12);
    main_box.append(picker.widget());

    let dialog_button = Button::with_label("Choose in dialog...");
    dialog_button.set_margin_start(12);
    dialog_button.set_margin_end(12);
    dialog_button.set_margin_bottom(12);
    main_box.append(&dialog_button);

    let picker = std::rc::Rc::new(picker);
    let window_for_dialog = window.clone();
    dialog_button.connect_clicked(move |_| {
        let dialog = RgbPickerDialog::new(Some(window_for_dialog.upcast_ref::<gtk4::Window>()));
        dialog.set_color(picker.get_color());

        let picker_for_chosen = picker.clone();
        dialog.set_on_color_chosen(move |color| {
            info!("dialog confirmed {}", to_web_color(color, false));
            picker_for_chosen.set_color(color);
        });
        dialog.set_on_cancel(|| {
            info!("dialog cancelled");
        });

        dialog.present();
    });

    window.set_child(Some(&main_box));
    window.present();
}

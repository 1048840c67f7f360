// src/ui/preferences.rs
// Export defaults; live view settings sit in the sidebar

use crate::rendering::ExportFormat;
use crate::state::AppState;
use gtk4::{self as gtk, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

const FORMATS: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Pdf, ExportFormat::Svg];

pub fn show_preferences_window(parent: &gtk::ApplicationWindow, state: Rc<RefCell<AppState>>) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(true)
        .default_width(420)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let notebook = gtk::Notebook::new();
    notebook.set_vexpand(true);

    let export_tab = build_export_tab(state.clone());
    notebook.append_page(&export_tab, Some(&gtk::Label::new(Some("Export"))));

    let defaults_tab = build_defaults_tab(state.clone());
    notebook.append_page(&defaults_tab, Some(&gtk::Label::new(Some("Defaults"))));

    main_vbox.append(&notebook);

    // Footer
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer.set_margin_top(10);
    footer.set_margin_bottom(10);
    footer.set_margin_end(10);
    footer.set_halign(gtk::Align::End);

    let btn_close = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    btn_close.connect_clicked(move |_| win_clone.close());
    footer.append(&btn_close);
    main_vbox.append(&footer);

    window.set_child(Some(&main_vbox));
    window.present();
}

fn tab_box() -> gtk::Box {
    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 15);
    vbox.set_margin_top(20);
    vbox.set_margin_bottom(20);
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);
    vbox
}

fn labeled_row(label: &str, widget: &impl IsA<gtk::Widget>) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    let lbl = gtk::Label::new(Some(label));
    lbl.set_halign(gtk::Align::Start);
    lbl.set_hexpand(true);
    row.append(&lbl);
    row.append(widget);
    row
}

// ============================================================================
// TAB 1: EXPORT
// ============================================================================

fn build_export_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
    let vbox = tab_box();

    // 1. Default format (used when the chosen file name has no known extension)
    let names: Vec<&str> = FORMATS.iter().map(|f| f.extension()).collect();
    let format_dd = gtk::DropDown::from_strings(&names);
    let current = state.borrow().config.default_export_format;
    format_dd.set_selected(FORMATS.iter().position(|f| *f == current).unwrap_or(0) as u32);
    let s1 = state.clone();
    format_dd.connect_selected_notify(move |dd| {
        if let Some(format) = FORMATS.get(dd.selected() as usize) {
            s1.borrow_mut().config.default_export_format = *format;
        }
    });
    vbox.append(&labeled_row("Default Format:", &format_dd));

    // 2. Image size
    let (w, h) = state.borrow().config.export_size;
    let spin_w = gtk::SpinButton::with_range(200.0, 8000.0, 100.0);
    spin_w.set_value(w as f64);
    let spin_h = gtk::SpinButton::with_range(200.0, 8000.0, 100.0);
    spin_h.set_value(h as f64);

    let s2 = state.clone();
    spin_w.connect_value_changed(move |sp| {
        s2.borrow_mut().config.export_size.0 = sp.value() as u32;
    });
    let s3 = state.clone();
    spin_h.connect_value_changed(move |sp| {
        s3.borrow_mut().config.export_size.1 = sp.value() as u32;
    });
    vbox.append(&labeled_row("Width (px):", &spin_w));
    vbox.append(&labeled_row("Height (px):", &spin_h));

    let note = gtk::Label::new(Some("PDF and SVG use the same size in points."));
    note.add_css_class("dim-label");
    note.set_halign(gtk::Align::Start);
    vbox.append(&note);

    vbox
}

// ============================================================================
// TAB 2: DEFAULTS
// ============================================================================

fn build_defaults_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
    let vbox = tab_box();

    let info = gtk::Label::new(Some(
        "Theme, marker size and tolerances are saved when the window closes.",
    ));
    info.set_halign(gtk::Align::Start);
    info.set_wrap(true);
    vbox.append(&info);

    let btn_save = gtk::Button::with_label("Save Settings Now");
    btn_save.connect_clicked(move |_| {
        let msg = state.borrow_mut().save_config();
        log::info!("{}", msg);
    });
    vbox.append(&btn_save);

    vbox
}

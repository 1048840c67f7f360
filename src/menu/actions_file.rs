use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

use crate::io::spreadsheet::SUPPORTED_EXTENSIONS;
use crate::rendering::{export_chart, ExportFormat};
use crate::state::{AppState, Slot};
use crate::ui::{show_preferences_window, Views};

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    views: &Views,
) {
    // --- OPEN ACTIONS (one per dataset slot) ---
    add_open_action(app, window, &state, views, "open_energy", Slot::Energy, "Open Energy Data");
    add_open_action(app, window, &state, views, "open_bonds", Slot::Bond, "Open Bond Data");
    add_open_action(app, window, &state, views, "open_structures", Slot::Structure, "Open Structure Data");


    // --- SAMPLE DATA ACTION ---
    let sample_action = gtk4::gio::SimpleAction::new("load_sample", None);
    let state_weak_d = Rc::downgrade(&state);
    let views_d = views.clone();

    sample_action.connect_activate(move |_, _| {
        if let Some(st) = state_weak_d.upgrade() {
            st.borrow_mut().load_sample();
            views_d.refresh(&st);
        }
    });
    app.add_action(&sample_action);


    // --- EXPORT CHART ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak_e = window.downgrade();
    let state_weak_e = Rc::downgrade(&state);

    export_action.connect_activate(move |_, _| {
        let win = match win_weak_e.upgrade() { Some(w) => w, None => return };
        let st_rc = match state_weak_e.upgrade() { Some(s) => s, None => return };

        let (format, file_stem) = {
            let st = st_rc.borrow();
            if st.active_projection().is_none() {
                log::warn!("Nothing to export: {}", st.missing_input(st.active_chart).unwrap_or("no data"));
                return;
            }
            (st.config.default_export_format, st.active_chart.tab_label().to_lowercase().replace(' ', "_"))
        };

        let dialog = FileChooserNative::new(Some("Export Chart"), Some(&win), FileChooserAction::Save, Some("Export"), Some("Cancel"));

        let filter_png = FileFilter::new(); filter_png.set_name(Some("PNG Image (*.png)")); filter_png.add_pattern("*.png"); dialog.add_filter(&filter_png);
        let filter_pdf = FileFilter::new(); filter_pdf.set_name(Some("PDF Document (*.pdf)")); filter_pdf.add_pattern("*.pdf"); dialog.add_filter(&filter_pdf);
        let filter_svg = FileFilter::new(); filter_svg.set_name(Some("SVG Image (*.svg)")); filter_svg.add_pattern("*.svg"); dialog.add_filter(&filter_svg);

        match format {
            ExportFormat::Png => dialog.set_filter(&filter_png),
            ExportFormat::Pdf => dialog.set_filter(&filter_pdf),
            ExportFormat::Svg => dialog.set_filter(&filter_svg),
        }
        dialog.set_current_name(&format!("{}.{}", file_stem, format.extension()));

        let state_weak_inner = state_weak_e.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Some(st) = state_weak_inner.upgrade() {
                        let s = st.borrow();
                        if let Some(chart) = s.active_projection() {
                            match export_chart(&chart, &s.chart_style(), &path, s.config.export_size, s.config.default_export_format) {
                                Ok(()) => log::info!("Exported to {}", path.display()),
                                Err(e) => log::error!("Export failed: {}", e),
                            }
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);


    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let win_weak_p = window.downgrade();
    let state_weak_p = Rc::downgrade(&state);

    pref_action.connect_activate(move |_, _| {
        if let (Some(win), Some(st)) = (win_weak_p.upgrade(), state_weak_p.upgrade()) {
            show_preferences_window(&win, st);
        }
    });
    app.add_action(&pref_action);


    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();

    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}

fn add_open_action(
    app: &Application,
    window: &ApplicationWindow,
    state: &Rc<RefCell<AppState>>,
    views: &Views,
    name: &str,
    slot: Slot,
    title: &'static str,
) {
    let open_action = gtk4::gio::SimpleAction::new(name, None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(state);
    let views = views.clone();

    open_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some(title),
            Some(&win),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter_any = FileFilter::new();
        filter_any.set_name(Some("Spreadsheets (*.xlsx, *.xls, *.ods)"));
        for ext in SUPPORTED_EXTENSIONS {
            filter_any.add_pattern(&format!("*.{}", ext));
        }
        dialog.add_filter(&filter_any);

        let state_weak_inner = state_weak.clone();
        let views_inner = views.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let Some(st) = state_weak_inner.upgrade() {
                        // Borrow ends before the refresh re-borrows
                        if !st.borrow_mut().upload(slot, &path) {
                            log::warn!("Kept the previous {} data", slot.label());
                        }
                        views_inner.refresh(&st);
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&open_action);
}

// src/ui/mod.rs
pub mod charts;
pub mod preferences;

pub use charts::ChartTabs;
pub use preferences::show_preferences_window;

use gtk4::prelude::*;
use gtk4::{
    glib, Application, ApplicationWindow, Frame, Label, Orientation, Paned, Revealer,
    RevealerTransitionType, ScrolledWindow, TextView,
};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

use crate::menu;
use crate::panels::sidebar;
use crate::state::{AppState, StatusLevel};
use crate::utils::logger;

pub const APP_ID: &str = "org.tsview.tsview";

/// Widgets that must follow state changes
#[derive(Clone)]
pub struct Views {
    pub charts: ChartTabs,
    pub status: Label,
}

impl Views {
    /// Pushes the current state into the dropdowns and status line, then redraws
    pub fn refresh(&self, state: &Rc<RefCell<AppState>>) {
        let st = state.borrow();
        self.charts.refresh(&st);
        match &st.status {
            Some(status) => {
                self.status.set_text(&status.message);
                if status.level == StatusLevel::Error {
                    self.status.add_css_class("error");
                } else {
                    self.status.remove_css_class("error");
                }
            }
            None => self.status.set_text("No data loaded."),
        }
    }
}

pub fn run() -> glib::ExitCode {
    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &Application) {
    // Console first so config messages reach it
    let console_view = TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .monospace(true)
        .left_margin(10)
        .right_margin(10)
        .top_margin(10)
        .bottom_margin(10)
        .build();
    if let Err(e) = logger::init(&console_view) {
        eprintln!("Logger already installed: {}", e);
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("TS Benchmark Dashboard")
        .default_width(1300)
        .default_height(850)
        .build();

    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // --- Right side: chart notebook over console ---
    let charts = ChartTabs::build(state.clone());
    let info_frame = Frame::new(Some("Log"));
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    let right_pane = Paned::new(Orientation::Vertical);
    right_pane.set_start_child(Some(&charts.notebook));
    right_pane.set_end_child(Some(&info_frame));
    right_pane.set_resize_end_child(false);
    right_pane.set_hexpand(true);

    let status = Label::builder()
        .label("No data loaded.")
        .wrap(true)
        .xalign(0.0)
        .build();
    let views = Views { charts, status };

    // --- Left side ---
    let sidebar_widget = sidebar::build(state.clone(), &views);
    let sidebar_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideRight)
        .child(&sidebar_widget)
        .reveal_child(true)
        .build();

    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);
    main_hbox.append(&sidebar_revealer);
    main_hbox.append(&right_pane);

    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &views, &sidebar_revealer);
    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    // Persist view settings on exit
    let s = state.clone();
    window.connect_close_request(move |_| {
        let msg = s.borrow_mut().save_config();
        log::info!("{}", msg);
        glib::Propagation::Proceed
    });

    views.refresh(&state);
    log::info!("Open an energy, bond or structure workbook, or load sample data (Ctrl+L).");
    window.present();
}

use gtk4::prelude::*;
use gtk4::{Application, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AppState, ChartKind};
use crate::ui::Views;

pub fn setup(app: &Application, state: Rc<RefCell<AppState>>, views: &Views, sidebar: &Revealer) {
    // --- CHART NAVIGATION ---
    for (name, step) in [("next_chart", 1isize), ("prev_chart", -1isize)] {
        let action = gtk4::gio::SimpleAction::new(name, None);
        let state_weak = Rc::downgrade(&state);
        let charts = views.charts.clone();
        action.connect_activate(move |_, _| {
            let Some(st) = state_weak.upgrade() else { return };
            let current = st.borrow().active_chart;
            let n = ChartKind::ALL.len() as isize;
            let idx = ChartKind::ALL.iter().position(|k| *k == current).unwrap_or(0) as isize;
            let next = ChartKind::ALL[(idx + step).rem_euclid(n) as usize];
            // switch-page updates the state
            charts.select_page(next);
        });
        app.add_action(&action);
    }

    // --- TOGGLE SIDEBAR ---
    let toggle_action = gtk4::gio::SimpleAction::new("toggle_sidebar", None);
    let rev_weak = sidebar.downgrade();
    toggle_action.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            rev.set_reveal_child(!rev.reveals_child());
        }
    });
    app.add_action(&toggle_action);
}

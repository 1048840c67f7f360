// src/panels/sidebar.rs

use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{
  Adjustment, Align, Box as GtkBox, Button, CssProvider, DropDown, Expander, Frame, Label,
  Orientation, PolicyType, Scale, ScrolledWindow, STYLE_PROVIDER_PRIORITY_APPLICATION,
};

use crate::analysis::Tolerances;
use crate::config::{MAX_MARKER_SIZE, MIN_MARKER_SIZE};
use crate::rendering::ChartTheme;
use crate::state::AppState;
use crate::ui::Views;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds the sidebar: data status, appearance and diagnostic tolerances
pub fn build(state: Rc<RefCell<AppState>>, views: &Views) -> ScrolledWindow {
  // --- 0. Slider look ---
  let provider = CssProvider::new();
  provider.load_from_data(
    "
        scale.thin-slider slider {
            min-width: 6px;
            min-height: 18px;
            margin-top: -7px;
            margin-bottom: -7px;
            border-radius: 2px;
            background-color: #555555;
            box-shadow: none;
            outline: none;
        }
        scale.thin-slider slider:hover {
            background-color: #3584e4;
        }
        label.error {
            color: #d13c3c;
        }
    ",
  );

  if let Some(display) = gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }

  // 1. Root Container (Scrollable)
  let scroll = ScrolledWindow::builder()
    .hscrollbar_policy(PolicyType::Never)
    .vscrollbar_policy(PolicyType::Automatic)
    .min_content_width(240)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 10);
  root_vbox.set_margin_start(10);
  root_vbox.set_margin_end(10);
  root_vbox.set_margin_top(10);
  root_vbox.set_margin_bottom(10);
  scroll.set_child(Some(&root_vbox));

  // --- Helper for Sliders (snaps to step) ---
  let create_slider =
    |label: &str, min: f64, max: f64, step: f64, digits: i32, val: f64, callback: Box<dyn Fn(f64)>| {
      let b = GtkBox::new(Orientation::Vertical, 2);
      b.append(&Label::builder().label(label).halign(Align::Start).build());

      let adj = Adjustment::new(val, min, max, step, step, 0.0);
      let scale = Scale::new(Orientation::Horizontal, Some(&adj));
      scale.add_css_class("thin-slider");
      scale.set_digits(digits);
      scale.set_draw_value(true);
      scale.set_value_pos(gtk4::PositionType::Right);

      scale.connect_value_changed(move |sc| {
        let raw = sc.value();
        let snapped = (raw / step).round() * step;

        if (raw - snapped).abs() > 0.0001 {
          sc.set_value(snapped);
          return;
        }
        callback(snapped);
      });
      b.append(&scale);
      b
    };

  let padded_box = || {
    let b = GtkBox::new(Orientation::Vertical, 10);
    b.set_margin_top(10);
    b.set_margin_bottom(10);
    b.set_margin_start(10);
    b.set_margin_end(10);
    b
  };

  // ============================================================
  // SECTION 1: DATA
  // ============================================================
  let frame_data = Frame::new(Some("Data"));
  let vbox_data = padded_box();

  views.status.add_css_class("caption");
  vbox_data.append(&views.status);

  let btn_sample = Button::with_label("Load Sample Data");
  btn_sample.set_action_name(Some("app.load_sample"));
  vbox_data.append(&btn_sample);

  let open_row = GtkBox::new(Orientation::Horizontal, 5);
  open_row.set_homogeneous(true);
  for (label, action) in [
    ("Energy", "app.open_energy"),
    ("Bonds", "app.open_bonds"),
    ("RMSD", "app.open_structures"),
  ] {
    let btn = Button::with_label(label);
    btn.set_action_name(Some(action));
    btn.set_tooltip_text(Some("Open a workbook for this dataset"));
    open_row.append(&btn);
  }
  vbox_data.append(&open_row);

  frame_data.set_child(Some(&vbox_data));
  root_vbox.append(&frame_data);

  // ============================================================
  // SECTION 2: APPEARANCE
  // ============================================================
  let style_expander = Expander::new(Some("Appearance"));
  style_expander.set_expanded(true);
  let style_box = padded_box();

  // Theme
  let theme_row = GtkBox::new(Orientation::Horizontal, 10);
  theme_row.append(&Label::new(Some("Theme")));
  let theme_names: Vec<&str> = ChartTheme::ALL.iter().map(|t| t.name()).collect();
  let theme_dd = DropDown::from_strings(&theme_names);
  theme_dd.set_selected(state.borrow().theme.index() as u32);
  theme_dd.set_hexpand(true);

  let s_th = state.clone();
  let charts_th = views.charts.clone();
  theme_dd.connect_selected_notify(move |dd| {
    if let Some(theme) = ChartTheme::ALL.get(dd.selected() as usize) {
      s_th.borrow_mut().set_theme(*theme);
      charts_th.queue_draw();
    }
  });
  theme_row.append(&theme_dd);
  style_box.append(&theme_row);

  // Marker size
  let s_ms = state.clone();
  let charts_ms = views.charts.clone();
  style_box.append(&create_slider(
    "Marker Size (px)",
    MIN_MARKER_SIZE as f64,
    MAX_MARKER_SIZE as f64,
    1.0,
    0,
    state.borrow().marker_size as f64,
    Box::new(move |v| {
      s_ms.borrow_mut().set_marker_size(v as u32);
      charts_ms.queue_draw();
    }),
  ));

  style_expander.set_child(Some(&style_box));
  root_vbox.append(&style_expander);

  // ============================================================
  // SECTION 3: DIAGNOSTIC TOLERANCES
  // ============================================================
  let tol_expander = Expander::new(Some("Diagnostic Tolerances"));
  tol_expander.set_expanded(false);
  let tol_box = padded_box();
  let current: Tolerances = state.borrow().tolerances;

  let s_rt = state.clone();
  let charts_rt = views.charts.clone();
  tol_box.append(&create_slider(
    "RMSD (Å)",
    0.01,
    1.0,
    0.01,
    2,
    current.rmsd,
    Box::new(move |v| {
      let mut st = s_rt.borrow_mut();
      let tol = Tolerances { rmsd: v, ..st.tolerances };
      st.set_tolerances(tol);
      charts_rt.queue_draw();
    }),
  ));

  let s_et = state.clone();
  let charts_et = views.charts.clone();
  tol_box.append(&create_slider(
    "Energy (kcal/mol)",
    0.1,
    10.0,
    0.1,
    1,
    current.energy,
    Box::new(move |v| {
      let mut st = s_et.borrow_mut();
      let tol = Tolerances { energy: v, ..st.tolerances };
      st.set_tolerances(tol);
      charts_et.queue_draw();
    }),
  ));

  tol_expander.set_child(Some(&tol_box));
  root_vbox.append(&tol_expander);

  scroll
}

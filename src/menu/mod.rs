// src/menu/mod.rs

use crate::state::AppState;
use crate::ui::Views;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  views: &Views,
  sidebar: &Revealer,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), views);
  actions_view::setup(app, state.clone(), views, sidebar);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.open_energy", &["<Primary>o"]);
  app.set_accels_for_action("app.open_bonds", &["<Primary>b"]);
  app.set_accels_for_action("app.open_structures", &["<Primary><Shift>o"]);
  app.set_accels_for_action("app.load_sample", &["<Primary>l"]);
  app.set_accels_for_action("app.export", &["<Primary>e"]);
  app.set_accels_for_action("app.preferences", &["<Primary>p"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.next_chart", &["<Primary>Page_Down"]);
  app.set_accels_for_action("app.prev_chart", &["<Primary>Page_Up"]);
  app.set_accels_for_action("app.toggle_sidebar", &["F9"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  let open_section = gtk4::gio::Menu::new();
  open_section.append(Some("Open Energy Data..."), Some("app.open_energy"));
  open_section.append(Some("Open Bond Data..."), Some("app.open_bonds"));
  open_section.append(Some("Open Structure Data..."), Some("app.open_structures"));
  file_menu.append_section(None, &open_section);

  let sample_section = gtk4::gio::Menu::new();
  sample_section.append(Some("Load Sample Data"), Some("app.load_sample"));
  file_menu.append_section(None, &sample_section);

  let rest = gtk4::gio::Menu::new();
  rest.append(Some("Export Chart..."), Some("app.export"));
  rest.append(Some("Preferences..."), Some("app.preferences"));
  rest.append(Some("Quit"), Some("app.quit"));
  file_menu.append_section(None, &rest);
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Next Chart"), Some("app.next_chart"));
  view_menu.append(Some("Previous Chart"), Some("app.prev_chart"));
  view_menu.append(Some("Toggle Sidebar"), Some("app.toggle_sidebar"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("Input Formats"), Some("app.help_formats"));
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}

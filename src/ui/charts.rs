// src/ui/charts.rs

use gtk4::prelude::*;
use gtk4::{Align, DropDown, Label, Notebook, Orientation, StringList};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use plotters::prelude::*;
use plotters_cairo::CairoBackend;

use crate::rendering::chart::{draw_chart, draw_placeholder};
use crate::state::{AppState, ChartKind, Selector};

/// One notebook page: optional selector row plus the plot canvas
pub struct ChartTab {
    pub kind: ChartKind,
    pub drawing_area: gtk4::DrawingArea,
    pub selector: Option<(Selector, DropDown)>,
}

/// All chart pages and the guard that mutes dropdown signals during refresh
#[derive(Clone)]
pub struct ChartTabs {
    pub notebook: Notebook,
    pub tabs: Rc<Vec<ChartTab>>,
    updating: Rc<Cell<bool>>,
}

impl ChartTabs {
    pub fn build(state: Rc<RefCell<AppState>>) -> Self {
        let notebook = Notebook::new();
        notebook.set_scrollable(true);
        notebook.set_vexpand(true);
        let updating = Rc::new(Cell::new(false));

        let mut tabs = Vec::with_capacity(ChartKind::ALL.len());
        for kind in ChartKind::ALL {
            let (page, tab) = build_page(kind, state.clone(), updating.clone());
            notebook.append_page(&page, Some(&Label::new(Some(kind.tab_label()))));
            tabs.push(tab);
        }

        let s = state.clone();
        notebook.connect_switch_page(move |_, _, page_num| {
            if let Some(kind) = ChartKind::ALL.get(page_num as usize) {
                s.borrow_mut().set_active_chart(*kind);
            }
        });

        Self { notebook, tabs: Rc::new(tabs), updating }
    }

    /// Reloads every dropdown from the current datasets and redraws
    pub fn refresh(&self, state: &AppState) {
        self.updating.set(true);
        for tab in self.tabs.iter() {
            if let Some((selector, dropdown)) = &tab.selector {
                let options = state.options(*selector);
                let refs: Vec<&str> = options.iter().map(String::as_str).collect();
                dropdown.set_model(Some(&StringList::new(&refs)));
                let selected = state.selected(*selector);
                let idx = options.iter().position(|o| *o == selected).unwrap_or(0);
                dropdown.set_selected(idx as u32);
                dropdown.set_sensitive(!options.is_empty());
            }
        }
        self.updating.set(false);
        self.queue_draw();
    }

    pub fn queue_draw(&self) {
        for tab in self.tabs.iter() {
            tab.drawing_area.queue_draw();
        }
    }

    pub fn select_page(&self, kind: ChartKind) {
        if let Some(idx) = ChartKind::ALL.iter().position(|k| *k == kind) {
            self.notebook.set_current_page(Some(idx as u32));
        }
    }
}

fn build_page(
    kind: ChartKind,
    state: Rc<RefCell<AppState>>,
    updating: Rc<Cell<bool>>,
) -> (gtk4::Box, ChartTab) {
    let root = gtk4::Box::new(Orientation::Vertical, 10);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);

    let drawing_area = gtk4::DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);
    drawing_area.set_content_height(400);

    // --- Parameter dropdown ---
    let selector = kind.selector().map(|selector| {
        let controls = gtk4::Box::new(Orientation::Horizontal, 10);
        controls.append(&Label::builder().label(selector.label()).halign(Align::Start).build());

        let dropdown = DropDown::from_strings(&[]);
        dropdown.set_sensitive(false);
        controls.append(&dropdown);
        root.append(&controls);

        let s = state.clone();
        let da = drawing_area.clone();
        dropdown.connect_selected_notify(move |dd| {
            if updating.get() {
                return;
            }
            let choice = dd
                .selected_item()
                .and_downcast::<gtk4::StringObject>()
                .map(|o| o.string().to_string());
            if let Some(choice) = choice {
                if s.borrow_mut().select(selector, &choice) {
                    da.queue_draw();
                }
            }
        });
        (selector, dropdown)
    });

    // --- Draw Function (Screen) ---
    let s = state;
    drawing_area.set_draw_func(move |_, cr, width, height| {
        let backend = match CairoBackend::new(cr, (width as u32, height as u32)) {
            Ok(b) => b,
            Err(e) => {
                log::error!("Cairo backend unavailable: {:?}", e);
                return;
            }
        };
        let root_area = backend.into_drawing_area();
        let st = s.borrow();
        if let Err(e) = paint(&root_area, &st, kind) {
            log::error!("Failed to draw {}: {}", kind.tab_label(), e);
        }
    });

    root.append(&drawing_area);
    (root, ChartTab { kind, drawing_area, selector })
}

fn paint<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    st: &AppState,
    kind: ChartKind,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let style = st.chart_style();
    match st.projection(kind) {
        Some(chart) => draw_chart(root, &chart, &style),
        None => {
            let palette = style.theme.palette();
            root.fill(&palette.background)?;
            draw_placeholder(root, st.missing_input(kind).unwrap_or("No data."), &palette)
        }
    }
}

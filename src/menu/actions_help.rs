use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

const FORMATS_TEXT: &str = "Energy workbook: a 'System' column plus one column per method \
(relative energies in kcal/mol).\n\nBond workbook: System, Method, R1, R2 \
(forming/breaking bond lengths in Å).\n\nStructure workbook: System, Method, RMSD (Å).\n\n\
Only the first worksheet is read; the first row holds the column names.";

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("tsview")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Benchmark dashboard for transition-state energies and bond synchronicity.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);


    // --- INPUT FORMATS ---
    let formats_action = gtk4::gio::SimpleAction::new("help_formats", None);
    let win_weak_h = window.downgrade();

    formats_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_h.upgrade() {
            let dialog = gtk4::MessageDialog::builder()
                .transient_for(&win)
                .modal(true)
                .buttons(gtk4::ButtonsType::Ok)
                .text("Input Formats")
                .secondary_text(FORMATS_TEXT)
                .build();
            dialog.connect_response(|d, _| d.destroy());
            dialog.present();
        }
    });
    app.add_action(&formats_action);
}

// src/main.rs

fn main() -> gtk4::glib::ExitCode {
    tsview::ui::run()
}

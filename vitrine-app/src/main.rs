mod app;
mod app_state;
mod input;
mod launch;
mod theme;
mod ui;

fn main() -> eframe::Result {
    app::run()
}
